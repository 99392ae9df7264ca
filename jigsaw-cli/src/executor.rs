//! Parallel executor for running the solver over every input

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputSource;
use chrono::TimeDelta;
use jigsaw_core::{DynSolver, JurassicJigsaw, ParseError, Solver, SolverError, SolverInstance};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single part of one input
#[derive(Debug)]
pub struct SolverResult {
    /// Position of the input on the command line
    pub input: usize,
    pub label: String,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    pub solve_duration: TimeDelta,
    /// Set on the first result of each successfully parsed input
    pub parse_duration: Option<TimeDelta>,
    /// The marked composite image, after part 2 with `--show-image`
    pub image: Option<String>,
}

/// Work item representing one input to solve
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub input: usize,
    pub source: InputSource,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    inputs: Vec<InputSource>,
    parallelize_by: ParallelizeBy,
    part_filter: Option<u8>,
    show_image: bool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                inputs: config.inputs.clone(),
                parallelize_by: config.parallelize_by,
                part_filter: config.part_filter,
                show_image: config.show_image,
            },
            thread_pool,
        })
    }

    /// One work item per input, in command-line order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.inputs
            .iter()
            .enumerate()
            .map(|(input, source)| WorkItem {
                input,
                source: source.clone(),
                parts: self.filter_parts(JurassicJigsaw::PARTS),
            })
            .collect()
    }

    /// Filter parts based on config.part_filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let cfg = &self.sync_executor_config;

        match cfg.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, cfg) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Input => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map_with(tx.clone(), |tx, work| {
                    run_work_item(&work, tx, sync_executor_config).err()
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(err1), Some(err2)) => Some(ArcExecutorError::combine(err1, err2)),
                    (err1, err2) => err1.or(err2),
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

/// Create an error result for an input that never reached the solver
fn make_error_result(work: &WorkItem, part: u8, error: ParseError) -> SolverResult {
    SolverResult {
        input: work.input,
        label: work.source.label(),
        part,
        answer: Err(SolverError::ParseError(error)),
        solve_duration: TimeDelta::zero(),
        parse_duration: None,
        image: None,
    }
}

/// Report the failure once per requested part, then hand it back to the caller
fn fail_all_parts(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    parse_error: ParseError,
    error: ExecutorError,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        tx.send(make_error_result(work, part, parse_error.clone()))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Err(error.into())
}

/// Load, parse and solve one input, streaming one result per part
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let label = work.source.label();

    let input = match work.source.load() {
        Ok(input) => input,
        Err(e) => {
            let message = ParseError::Other(e.to_string());
            return fail_all_parts(work, tx, message, e.into());
        }
    };

    let mut solver = match SolverInstance::<JurassicJigsaw>::new(label.clone(), &input) {
        Ok(solver) => solver,
        Err(source) => {
            let error = ExecutorError::Parse {
                label,
                source: source.clone(),
            };
            return fail_all_parts(work, tx, source, error);
        }
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part_internal(work, part, &mut solver);
        result.parse_duration = parse_duration.take();
        if sync_executor_config.show_image && part == JurassicJigsaw::PARTS {
            result.image = solver.shared().render_marked_image();
        }
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Solve a single part
fn solve_part_internal(work: &WorkItem, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.duration();
            (Ok(result.answer), duration)
        }
        Err(e) => (Err(e.into()), TimeDelta::zero()),
    };

    SolverResult {
        input: work.input,
        label: solver.label().to_string(),
        part,
        answer,
        solve_duration,
        parse_duration: None,
        image: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::mpsc;
    use tempfile::NamedTempFile;

    const SINGLE_TILE: &str = "Tile 7:\n#####\n#.#.#\n##..#\n#...#\n#####\n";

    fn tile_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn config(inputs: Vec<InputSource>, parallelize_by: ParallelizeBy) -> Config {
        Config {
            inputs,
            part_filter: None,
            thread_count: 2,
            parallelize_by,
            quiet: true,
            show_image: true,
        }
    }

    fn run(config: &Config) -> (Vec<SolverResult>, Result<(), ArcExecutorError>) {
        let executor = Executor::new(config).unwrap();
        let (tx, rx) = mpsc::channel();
        let outcome = executor.execute(tx);
        let mut results: Vec<SolverResult> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.input, r.part));
        (results, outcome)
    }

    #[test]
    fn test_work_items_follow_part_filter() {
        let mut cfg = config(
            vec![InputSource::Stdin, InputSource::File(PathBuf::from("x"))],
            ParallelizeBy::Sequential,
        );
        let executor = Executor::new(&cfg).unwrap();
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].input, 1);
        assert_eq!(items[0].parts, 1..=2);

        cfg.part_filter = Some(2);
        let executor = Executor::new(&cfg).unwrap();
        assert_eq!(executor.collect_work_items()[0].parts, 2..=2);
    }

    #[test]
    fn test_solves_both_parts_of_each_input() {
        let first = tile_file(SINGLE_TILE);
        let second = tile_file(&SINGLE_TILE.replace("Tile 7", "Tile 3"));
        for mode in [ParallelizeBy::Sequential, ParallelizeBy::Input] {
            let cfg = config(
                vec![
                    InputSource::File(first.path().to_path_buf()),
                    InputSource::File(second.path().to_path_buf()),
                ],
                mode,
            );
            let (results, outcome) = run(&cfg);
            assert!(outcome.is_ok());

            let answers: Vec<_> = results
                .iter()
                .map(|r| r.answer.as_ref().unwrap().as_str())
                .collect();
            assert_eq!(answers, vec!["2401", "2", "81", "2"]);
            assert!(results[0].parse_duration.is_some());
            assert!(results[1].parse_duration.is_none());
            assert_eq!(results[1].image.as_deref(), Some(".#.\n#..\n...\n"));
            assert!(results[0].image.is_none());
        }
    }

    #[test]
    fn test_failed_inputs_are_reported_and_combined() {
        let good = tile_file(SINGLE_TILE);
        let bad = tile_file("Tile seven:\n#\n");
        let cfg = config(
            vec![
                InputSource::File(PathBuf::from("/nonexistent/day20.txt")),
                InputSource::File(good.path().to_path_buf()),
                InputSource::File(bad.path().to_path_buf()),
            ],
            ParallelizeBy::Input,
        );

        let (results, outcome) = run(&cfg);
        assert_eq!(results.len(), 6);
        assert!(results[0].answer.is_err() && results[1].answer.is_err());
        assert!(results[2].answer.is_ok() && results[3].answer.is_ok());
        assert!(results[4].answer.is_err() && results[5].answer.is_err());

        let error = outcome.unwrap_err();
        assert_eq!(error.errors().len(), 2);
        assert_eq!(error.to_string(), "Multiple errors occurred (2 total)");
    }
}
