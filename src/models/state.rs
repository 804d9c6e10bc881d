//! Process lifecycle states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a simulated process.
///
/// The `Display` form is the literal name written to the transition log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessState {
    /// Loaded, not yet arrived.
    New,
    /// Arrived and queued for the CPU.
    Ready,
    /// Occupying the CPU.
    Running,
    /// Blocked on I/O.
    Waiting,
    /// All CPU demand served.
    Terminated,
}

impl ProcessState {
    /// All states in lifecycle order.
    pub const ALL: [ProcessState; 5] = [
        ProcessState::New,
        ProcessState::Ready,
        ProcessState::Running,
        ProcessState::Waiting,
        ProcessState::Terminated,
    ];

    /// Log name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessState::New => "New",
            ProcessState::Ready => "Ready",
            ProcessState::Running => "Running",
            ProcessState::Waiting => "Waiting",
            ProcessState::Terminated => "Terminated",
        }
    }

    /// Whether the engine can move a record from `self` to `next`.
    pub fn can_transition_to(&self, next: ProcessState) -> bool {
        use ProcessState::*;
        matches!(
            (self, next),
            (New, Ready)
                | (Ready, Running)
                | (Running, Waiting)
                | (Running, Terminated)
                | (Waiting, Ready)
        )
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment specifiers apply
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        let names: Vec<String> = ProcessState::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["New", "Ready", "Running", "Waiting", "Terminated"]);
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:<10}|", ProcessState::Ready), "Ready     |");
    }

    #[test]
    fn test_legal_transitions() {
        use ProcessState::*;
        assert!(New.can_transition_to(Ready));
        assert!(Running.can_transition_to(Terminated));
        assert!(Waiting.can_transition_to(Ready));
        assert!(!New.can_transition_to(Running));
        assert!(!Waiting.can_transition_to(Running));
        assert!(!Terminated.can_transition_to(Ready));
    }
}
