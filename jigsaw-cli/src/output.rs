//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
        if let Some(image) = &result.image {
            print!("{}", image);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output with timing
    fn print_full(&self, result: &SolverResult) {
        match &result.answer {
            Ok(_) => println!("{}", format_full(result)),
            Err(_) => eprintln!("{}", format_full(result)),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(results);
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} solved, {} failed",
            summary.successes, summary.failures
        );
        if !summary.failed_inputs.is_empty() {
            println!("Failed inputs: {}", summary.failed_inputs);
        }
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs = (summary.parse_time + summary.solve_time)
                .num_microseconds()
                .unwrap_or(0) as f64
                / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Totals over a finished run
#[derive(Debug, PartialEq)]
struct Summary {
    successes: usize,
    failures: usize,
    /// Labels of inputs with at least one failed part, comma separated
    failed_inputs: String,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let (solved, failed): (Vec<&SolverResult>, Vec<&SolverResult>) =
            results.iter().partition(|r| r.answer.is_ok());

        Summary {
            successes: solved.len(),
            failures: failed.len(),
            failed_inputs: failed.iter().map(|r| r.label.as_str()).unique().join(", "),
            parse_time: results.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: solved.iter().map(|r| r.solve_duration).sum(),
        }
    }
}

/// One line per part: `<label> part <n>: <answer> (parse: .., solve: ..)`
fn format_full(result: &SolverResult) -> String {
    let prefix = format!("{} part {}", result.label, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
