//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use crate::input::InputSource;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Inputs in command-line order
    pub inputs: Vec<InputSource>,
    /// Part filter (None = both parts)
    pub part_filter: Option<u8>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
    /// Print the marked image after part 2
    pub show_image: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let inputs: Vec<InputSource> = if args.inputs.is_empty() {
            vec![InputSource::Stdin]
        } else {
            args.inputs
                .iter()
                .map(|path| match InputSource::from_arg(path) {
                    InputSource::File(path) => InputSource::File(expand_tilde(&path)),
                    stdin => stdin,
                })
                .collect()
        };

        let stdin_count = inputs
            .iter()
            .filter(|source| **source == InputSource::Stdin)
            .count();
        if stdin_count > 1 {
            return Err(CliError::Config(format!(
                "standard input can only be read once, but `-` was given {} times",
                stdin_count
            )));
        }

        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config("--threads must be at least 1".to_string()));
            }
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            inputs,
            part_filter: args.part,
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            show_image: args.show_image,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
