//! Single-CPU process lifecycle simulator.
//!
//! Ingests process descriptors (arrival time, CPU demand, I/O behavior),
//! advances a discrete clock, and moves every process through
//! New → Ready → Running → Waiting → Terminated, recording each transition.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessRecord`, `ProcessState`, `Transition`
//! - **`queue`**: `StageQueue`, the FIFO container behind every stage
//! - **`engine`**: `Simulation` state machine, configuration, and KPIs
//! - **`io`**: descriptor reader and transition log sinks
//! - **`validation`**: workload integrity checks (duplicate PIDs, non-fresh counters)
//! - **`workload`**: seeded random workload generation
//!
//! # Example
//!
//! ```
//! use kernel_sim::engine::Simulation;
//! use kernel_sim::io::MemorySink;
//! use kernel_sim::models::ProcessRecord;
//!
//! let records = vec![ProcessRecord::new(1, 0, 3, 100, 0)];
//! let mut sim = Simulation::new(records).unwrap();
//! let mut sink = MemorySink::new();
//! let outcome = sim.run(&mut sink).unwrap();
//!
//! assert_eq!(outcome.makespan, 3);
//! assert_eq!(sink.transitions().len(), 3);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3, 5

pub mod engine;
pub mod error;
pub mod io;
pub mod models;
pub mod queue;
pub mod validation;
pub mod workload;

pub use error::{QueueError, SimError};
