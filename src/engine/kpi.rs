//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from the
//! transition log of a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Time of the last termination |
//! | CPU Utilization | Busy ticks / makespan |
//! | Turnaround | Termination time - arrival time |
//! | Ready Wait | Ticks spent in Ready before each dispatch |
//! | I/O Blocks | Number of Running → Waiting transitions |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Pid, ProcessRecord, ProcessState, Tick, Transition};

/// Per-process indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessKpi {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time.
    pub arrival_time: Tick,
    /// Termination time. `None` if the process never terminated in the log.
    pub completion_time: Option<Tick>,
    /// Completion − arrival.
    pub turnaround: Option<Tick>,
    /// Total ticks spent in Ready.
    pub ready_wait: Tick,
    /// Number of I/O blocks.
    pub io_blocks: usize,
    /// Number of dispatches.
    pub dispatches: usize,
}

/// Run-level indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationKpi {
    /// Time of the last termination.
    pub makespan: Tick,
    /// CPU ticks consumed by all processes.
    pub busy_ticks: Tick,
    /// busy_ticks / makespan (0.0..1.0). 0.0 when makespan is zero.
    pub cpu_utilization: f64,
    /// Mean turnaround over terminated processes.
    pub avg_turnaround: f64,
    /// Mean ready wait over all processes.
    pub avg_ready_wait: f64,
    /// Per-process indicators, in record order.
    pub processes: Vec<ProcessKpi>,
}

impl SimulationKpi {
    /// Computes KPIs from the records and the transitions of one run.
    ///
    /// # Arguments
    /// * `records` - The simulated records (for arrival times and CPU demand).
    /// * `transitions` - The run's transitions in emission order.
    pub fn calculate(records: &[ProcessRecord], transitions: &[Transition]) -> Self {
        let mut entered_ready: HashMap<Pid, Tick> = HashMap::new();
        let mut per_pid: HashMap<Pid, ProcessKpi> = records
            .iter()
            .map(|r| {
                (
                    r.pid,
                    ProcessKpi {
                        pid: r.pid,
                        arrival_time: r.arrival_time,
                        completion_time: None,
                        turnaround: None,
                        ready_wait: 0,
                        io_blocks: 0,
                        dispatches: 0,
                    },
                )
            })
            .collect();

        let mut makespan: Tick = 0;
        for t in transitions {
            let Some(kpi) = per_pid.get_mut(&t.pid) else {
                continue;
            };

            match (t.from, t.to) {
                (_, ProcessState::Ready) => {
                    entered_ready.insert(t.pid, t.time);
                }
                (ProcessState::Ready, ProcessState::Running) => {
                    kpi.dispatches += 1;
                    if let Some(since) = entered_ready.remove(&t.pid) {
                        kpi.ready_wait += t.time.saturating_sub(since);
                    }
                }
                (ProcessState::Running, ProcessState::Waiting) => kpi.io_blocks += 1,
                (_, ProcessState::Terminated) => {
                    kpi.completion_time = Some(t.time);
                    kpi.turnaround = Some(t.time.saturating_sub(kpi.arrival_time));
                    makespan = makespan.max(t.time);
                }
                _ => {}
            }
        }

        let busy_ticks: Tick = records.iter().map(|r| r.consumed_cpu_time()).sum();
        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            busy_ticks as f64 / makespan as f64
        };

        let processes: Vec<ProcessKpi> = records
            .iter()
            .filter_map(|r| per_pid.remove(&r.pid))
            .collect();

        let turnarounds: Vec<Tick> = processes.iter().filter_map(|p| p.turnaround).collect();
        let avg_turnaround = if turnarounds.is_empty() {
            0.0
        } else {
            turnarounds.iter().sum::<Tick>() as f64 / turnarounds.len() as f64
        };
        let avg_ready_wait = if processes.is_empty() {
            0.0
        } else {
            processes.iter().map(|p| p.ready_wait).sum::<Tick>() as f64 / processes.len() as f64
        };

        Self {
            makespan,
            busy_ticks,
            cpu_utilization,
            avg_turnaround,
            avg_ready_wait,
            processes,
        }
    }

    /// Indicators for one process.
    pub fn process(&self, pid: Pid) -> Option<&ProcessKpi> {
        self.processes.iter().find(|p| p.pid == pid)
    }
}
