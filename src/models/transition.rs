//! Transition (log event) model.

use serde::{Deserialize, Serialize};

use super::{Pid, ProcessState, Tick};

/// One state change of one process at one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Clock value of the tick in which the change happened.
    pub time: Tick,
    /// Process that changed state.
    pub pid: Pid,
    /// State left.
    pub from: ProcessState,
    /// State entered.
    pub to: ProcessState,
}

impl Transition {
    /// Creates a transition record.
    pub fn new(time: Tick, pid: Pid, from: ProcessState, to: ProcessState) -> Self {
        Self {
            time,
            pid,
            from,
            to,
        }
    }

    /// Whether this transition goes `from` → `to`.
    pub fn is(&self, from: ProcessState, to: ProcessState) -> bool {
        self.from == from && self.to == to
    }
}
