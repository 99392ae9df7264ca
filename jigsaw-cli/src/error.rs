//! Error types for the CLI

use jigsaw_core::ParseError;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),

    /// Some parts produced no answer
    #[error("{failed} part(s) failed")]
    Unsolved { failed: usize },
}

/// Input-specific errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Reading the file or standard input failed
    #[error("Failed to read {label}: {source}")]
    Read {
        label: String,
        #[source]
        source: std::io::Error,
    },
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// An input could not be loaded
    #[error("Input failed: {0}")]
    Input(#[from] InputError),

    /// An input was loaded but is not a valid tile listing
    #[error("Parse failed for {label}: {source}")]
    Parse {
        label: String,
        #[source]
        source: ParseError,
    },

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one flat `Multiple`
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// The individual errors, in the order they were combined
    pub fn errors(&self) -> Vec<ArcExecutorError> {
        match self.inner() {
            ExecutorError::Multiple(v) => v.clone(),
            _ => vec![self.clone()],
        }
    }
}
