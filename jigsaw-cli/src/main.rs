//! jigsaw - command-line runner for the tile-assembly jigsaw solver

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let executor = Executor::new(&config).map_err(|e| CliError::Config(e.to_string()))?;
    run_executor(executor, config.quiet)
}

/// Run the executor and print results as they become ready
fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    if !quiet {
        println!("Solving {} input(s)...", work_items.len());
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(&work_items);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!(
            "Warning: No result received for {}",
            aggregator.missing().join(", ")
        );
    }

    let executed = executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?;

    formatter.print_summary(&results);

    executed?;
    let failed = results.iter().filter(|r| r.answer.is_err()).count();
    if failed > 0 {
        return Err(CliError::Unsolved { failed });
    }
    Ok(())
}
