extern crate convolution_benchmark;

use convolution_benchmark::RunConfig;
use std::env;

fn main() {
    let result = RunConfig::from_args(env::args().skip(1))
        .and_then(|config| convolution_benchmark::run_convolution(&config));

    if let Err(ref e) = result {
        eprintln!("error: {}", e);

        for e in e.iter().skip(1) {
            eprintln!("caused by: {}", e);
        }

        if let Some(backtrace) = e.backtrace() {
            eprintln!("backtrace: {:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}
