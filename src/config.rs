//! Run configuration and command-line parsing.

use errors::*;
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "input_512_512.pgm";
pub const DEFAULT_OUTPUT_PATH: &str = "output_image_CPU.pgm";
pub const MASK_WIDTH: usize = 3;

pub const USAGE: &str = "usage: convolution-benchmark [-v|--verbose] [INPUT [OUTPUT]]";

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Side length of the averaging mask.
    pub mask_width: usize,
    /// Print per-step timings and image information.
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            mask_width: MASK_WIDTH,
            verbose: false,
        }
    }
}

impl RunConfig {
    /// Builds a config from the command-line arguments that follow the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut paths = Vec::new();
        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => config.verbose = true,
                s if s.starts_with('-') && s.len() > 1 => {
                    bail!(ErrorKind::Usage(format!("unknown option '{}'\n{}", s, USAGE)))
                }
                s => paths.push(PathBuf::from(s)),
            }
        }
        if paths.len() > 2 {
            bail!(ErrorKind::Usage(format!("too many arguments\n{}", USAGE)));
        }
        let mut paths = paths.into_iter();
        if let Some(input_path) = paths.next() {
            config.input_path = input_path;
        }
        if let Some(output_path) = paths.next() {
            config.output_path = output_path;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_uses_reference_paths() {
        let config = RunConfig::from_args(args(&[])).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.input_path, PathBuf::from("input_512_512.pgm"));
        assert_eq!(config.output_path, PathBuf::from("output_image_CPU.pgm"));
        assert_eq!(config.mask_width, 3);
        assert!(!config.verbose);
    }

    #[test]
    fn positional_paths_override_defaults() {
        let config = RunConfig::from_args(args(&["in.pgm"])).unwrap();
        assert_eq!(config.input_path, PathBuf::from("in.pgm"));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));

        let config = RunConfig::from_args(args(&["-v", "in.pgm", "out.pgm"])).unwrap();
        assert!(config.verbose);
        assert_eq!(config.input_path, PathBuf::from("in.pgm"));
        assert_eq!(config.output_path, PathBuf::from("out.pgm"));
    }

    #[test]
    fn rejects_unknown_options_and_extra_paths() {
        for list in &[&["--fast"][..], &["a", "b", "c"][..]] {
            match *RunConfig::from_args(args(list)).unwrap_err().kind() {
                ErrorKind::Usage(_) => {}
                ref other => panic!("unexpected error: {}", other),
            }
        }
    }
}
