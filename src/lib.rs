#[macro_use]
extern crate error_chain;
extern crate common;
extern crate image;

#[cfg(test)]
#[macro_use]
extern crate approx;
#[cfg(test)]
extern crate tempfile;

pub mod codec;
pub mod config;
pub mod convolve;
pub mod errors;
pub mod mask;
mod profiler;
pub mod raster;

pub use common::{ImageInfo, Sample};
pub use config::RunConfig;
pub use mask::Mask;
pub use raster::Raster;

use errors::*;
use profiler::Profiler;
use std::time::Duration;

/// Outcome of one [`run_convolution`].
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub width: usize,
    pub height: usize,
    /// Wall-clock time spent in the convolution call alone.
    pub elapsed: Duration,
}

/// Reads the input image, convolves it once with an averaging mask, prints
/// the time the convolution took and writes the result.
///
/// Nothing is written when reading the input fails.
pub fn run_convolution(config: &RunConfig) -> Result<RunReport> {
    let mut profiler = Profiler::new(config.verbose);

    profiler.step("Reading input image");
    let input = codec::decode(&config.input_path)?;

    if config.verbose {
        println!("Image size: {}×{}", input.width(), input.height());
    }

    profiler.step("Building averaging mask");
    let mask = Mask::averaging(config.mask_width)?;
    let mut output = Raster::new(input.width(), input.height())?;

    profiler.step("Running convolution");
    convolve::convolve_into(&input, &mask, &mut output)?;
    let elapsed = profiler.finish().unwrap_or_default();

    println!(
        "Time taken for convolution: {:.6} seconds",
        elapsed.as_secs_f64()
    );

    profiler.step("Saving image");
    codec::encode(&config.output_path, &output).chain_err(|| "Error saving output image")?;

    Ok(RunReport {
        width: input.width(),
        height: input.height(),
        elapsed,
    })
}
