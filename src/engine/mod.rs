//! Tick-driven simulation engine and run metrics.
//!
//! Provides the single-CPU lifecycle state machine and quality metrics
//! computed from its transition log.
//!
//! # Algorithm
//!
//! `Simulation` evaluates four stages per tick in a fixed order
//! (arrivals, I/O completions, the running burst, dispatch) and then
//! advances the clock. Ready is served first-come-first-served and a
//! running process keeps the CPU until it blocks or finishes.
//!
//! # KPI
//!
//! `SimulationKpi` computes makespan, CPU utilization, turnaround and
//! ready-queue wait per process.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1 (FCFS)

mod config;
mod kpi;
mod simulation;

pub use config::{IoCompletion, SimulationConfig, SinkPolicy};
pub use kpi::{ProcessKpi, SimulationKpi};
pub use simulation::{Simulation, SimulationOutcome, StageSizes, TickReport};
