//! Simulation domain models.
//!
//! Provides the data types shared by the engine, the descriptor reader,
//! and the transition log sinks.
//!
//! # Domain Mappings
//!
//! | kernel-sim | OS textbook | Input column |
//! |------------|-------------|--------------|
//! | ProcessRecord | PCB | one CSV row |
//! | ProcessState | process state | — |
//! | Transition | state change event | one log line |
//! | Tick | clock cycle | arrival time, durations |

mod process;
mod state;
mod transition;

pub use process::ProcessRecord;
pub use state::ProcessState;
pub use transition::Transition;

/// Discrete simulation time unit.
pub type Tick = u64;

/// Process identifier as read from the descriptor source.
pub type Pid = u32;
