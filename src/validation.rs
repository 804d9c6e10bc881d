//! Input validation for simulation workloads.
//!
//! Checks structural integrity of process records before the engine
//! accepts them. Detects:
//! - Duplicate PIDs
//! - Records whose runtime counters are not at their starting values
//! - Zero I/O durations under [`IoCompletion::Strict`] (they would never leave Waiting)

use crate::engine::IoCompletion;
use crate::models::ProcessRecord;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same PID.
    DuplicatePid,
    /// A record's runtime counters have already been advanced.
    InconsistentCounters,
    /// A blocking record has an I/O duration that can never complete.
    UnboundedIoWait,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates records with the default I/O completion rule.
pub fn validate_input(records: &[ProcessRecord]) -> ValidationResult {
    validate_records(records, IoCompletion::default())
}

/// Validates the records of a workload.
///
/// Checks:
/// 1. No duplicate PIDs
/// 2. Every record is fresh: `remaining_cpu_time == total_cpu_time` and no I/O wait in progress
/// 3. Under `IoCompletion::Strict`, every record that blocks has `io_duration > 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_records(records: &[ProcessRecord], io_completion: IoCompletion) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for r in records {
        if !pids.insert(r.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate PID: {}", r.pid),
            ));
        }

        if r.remaining_cpu_time() != r.total_cpu_time || r.waiting_time() != 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentCounters,
                format!(
                    "Process {} starts with remaining={} waiting={} (total={})",
                    r.pid,
                    r.remaining_cpu_time(),
                    r.waiting_time(),
                    r.total_cpu_time
                ),
            ));
        }

        if io_completion == IoCompletion::Strict && r.performs_io() && r.io_duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnboundedIoWait,
                format!(
                    "Process {} blocks for I/O with duration 0 under strict completion",
                    r.pid
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
