//! Process record (PCB) model.
//!
//! A process record is an immutable descriptor (arrival, CPU demand, I/O
//! pattern) plus the runtime counters the engine advances each tick.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1.3

use serde::{Deserialize, Serialize};

use super::{Pid, Tick};

/// A simulated process.
///
/// Descriptor fields are public and fixed once the record is handed to the
/// engine. Runtime counters are only advanced by the engine.
///
/// # Invariants
/// - `0 <= remaining_cpu_time <= total_cpu_time`
/// - `remaining_cpu_time == 0` only once the record is terminated, unless
///   `total_cpu_time` is zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier.
    pub pid: Pid,
    /// Tick at which the process becomes eligible (New → Ready).
    pub arrival_time: Tick,
    /// Total CPU ticks the process needs.
    pub total_cpu_time: Tick,
    /// Running ticks per burst before a mandatory I/O block. `0` = never blocks.
    pub io_frequency: Tick,
    /// Ticks spent in Waiting per I/O block.
    pub io_duration: Tick,
    remaining_cpu_time: Tick,
    waiting_time: Tick,
}

impl ProcessRecord {
    /// Creates a fresh record with `remaining = total` and a zero waiting counter.
    pub fn new(
        pid: Pid,
        arrival_time: Tick,
        total_cpu_time: Tick,
        io_frequency: Tick,
        io_duration: Tick,
    ) -> Self {
        Self {
            pid,
            arrival_time,
            total_cpu_time,
            io_frequency,
            io_duration,
            remaining_cpu_time: total_cpu_time,
            waiting_time: 0,
        }
    }

    /// CPU ticks still owed to this process.
    #[inline]
    pub fn remaining_cpu_time(&self) -> Tick {
        self.remaining_cpu_time
    }

    /// Ticks spent in the current I/O wait.
    #[inline]
    pub fn waiting_time(&self) -> Tick {
        self.waiting_time
    }

    /// CPU ticks already consumed.
    pub fn consumed_cpu_time(&self) -> Tick {
        self.total_cpu_time - self.remaining_cpu_time
    }

    /// Whether all CPU demand has been served.
    pub fn is_finished(&self) -> bool {
        self.remaining_cpu_time == 0
    }

    /// Whether this process ever blocks for I/O.
    pub fn performs_io(&self) -> bool {
        self.io_frequency > 0 && self.io_frequency < self.total_cpu_time
    }

    /// Consumes one CPU tick. Returns the new remaining time.
    pub(crate) fn run_one_tick(&mut self) -> Tick {
        self.remaining_cpu_time = self.remaining_cpu_time.saturating_sub(1);
        self.remaining_cpu_time
    }

    /// Advances the I/O wait counter by one tick. Returns the new value.
    pub(crate) fn wait_one_tick(&mut self) -> Tick {
        self.waiting_time += 1;
        self.waiting_time
    }

    pub(crate) fn reset_waiting_time(&mut self) {
        self.waiting_time = 0;
    }
}
