//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; solve every input in order on the calling thread
    Sequential,
    /// Parallelize across inputs; parts of one input run in order (default)
    #[default]
    Input,
}

/// Reassemble jigsaw tile images and hunt for sea monsters
#[derive(Parser, Debug)]
#[command(
    name = "jigsaw",
    about = "Reassemble jigsaw tile images and hunt for sea monsters",
    version
)]
pub struct Args {
    /// Puzzle input files; `-` reads standard input, which is also the default
    pub inputs: Vec<PathBuf>,

    /// Part to run (runs both parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential or input
    #[arg(long, value_enum, default_value = "input")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the assembled image with sea monsters marked after part 2
    #[arg(long)]
    pub show_image: bool,
}
