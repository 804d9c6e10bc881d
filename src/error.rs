//! Error types.
//!
//! | Error | Raised by | Severity |
//! |-------|-----------|----------|
//! | `SourceUnavailable` | descriptor reader | caller must not run the engine |
//! | `EmptyWorkload` | engine construction | zero records loaded |
//! | `InvalidWorkload` | engine construction | validation failed |
//! | `SinkUnavailable` | engine, `SinkPolicy::FailFast` only | aborts the run |
//! | `Invariant` | engine | logic defect, fail fast |
//! | `TickLimitExceeded` | engine, with a configured limit | aborts the run |

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::models::Tick;
use crate::validation::ValidationError;

/// Errors from [`StageQueue`](crate::queue::StageQueue) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Pop from a queue of size 0.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "dequeue from an empty queue"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Errors from loading, validating, or running a simulation.
#[derive(Debug)]
pub enum SimError {
    /// The descriptor source could not be opened or read.
    SourceUnavailable {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// No records were loaded.
    EmptyWorkload,
    /// Records failed validation.
    InvalidWorkload(Vec<ValidationError>),
    /// A transition could not be written to the log.
    SinkUnavailable(io::Error),
    /// A stage-ordering invariant was violated.
    Invariant(String),
    /// The configured tick limit was reached before every record terminated.
    TickLimitExceeded {
        /// Configured limit.
        limit: Tick,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::SourceUnavailable { path, source } => {
                write!(f, "cannot read descriptors from {}: {source}", path.display())
            }
            SimError::EmptyWorkload => write!(f, "no process records to simulate"),
            SimError::InvalidWorkload(errors) => {
                write!(f, "invalid workload ({} problem(s))", errors.len())?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
            SimError::SinkUnavailable(e) => write!(f, "cannot write transition log: {e}"),
            SimError::Invariant(msg) => write!(f, "engine invariant violated: {msg}"),
            SimError::TickLimitExceeded { limit } => {
                write!(f, "simulation did not finish within {limit} ticks")
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::SourceUnavailable { source, .. } => Some(source),
            SimError::SinkUnavailable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<QueueError> for SimError {
    fn from(e: QueueError) -> Self {
        SimError::Invariant(e.to_string())
    }
}
