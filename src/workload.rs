//! Random workload generation.
//!
//! Produces valid process record sets from a caller-supplied RNG, so runs
//! are reproducible with a seeded generator.
//!
//! # Example
//!
//! ```
//! use kernel_sim::workload::WorkloadGenerator;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let records = WorkloadGenerator::new(8).generate(&mut rng);
//! assert_eq!(records.len(), 8);
//! assert!(records.iter().all(|r| r.total_cpu_time >= 1));
//! ```

use rand::Rng;

use crate::io::DESCRIPTOR_HEADER;
use crate::models::{ProcessRecord, Tick};

/// Parameters for random workloads.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Number of records.
    pub count: usize,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: Tick,
    /// CPU demand is drawn from `1..=max_cpu_time`.
    pub max_cpu_time: Tick,
    /// I/O frequency is drawn from `1..=max_io_frequency` for blocking records.
    pub max_io_frequency: Tick,
    /// I/O duration is drawn from `0..=max_io_duration` for blocking records.
    pub max_io_duration: Tick,
    /// Probability that a record blocks for I/O at all.
    pub io_probability: f64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` records with moderate defaults.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_cpu_time: 15,
            max_io_frequency: 5,
            max_io_duration: 6,
            io_probability: 0.6,
        }
    }

    /// Sets the arrival window.
    pub fn with_max_arrival(mut self, max: Tick) -> Self {
        self.max_arrival = max;
        self
    }

    /// Sets the maximum CPU demand.
    pub fn with_max_cpu_time(mut self, max: Tick) -> Self {
        self.max_cpu_time = max;
        self
    }

    /// Sets the I/O pattern bounds.
    pub fn with_io(mut self, max_frequency: Tick, max_duration: Tick) -> Self {
        self.max_io_frequency = max_frequency;
        self.max_io_duration = max_duration;
        self
    }

    /// Sets the probability that a record blocks for I/O.
    pub fn with_io_probability(mut self, p: f64) -> Self {
        self.io_probability = p;
        self
    }

    /// Generates records with PIDs `1..=count`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessRecord> {
        let io_p = self.io_probability.clamp(0.0, 1.0);
        (1..=self.count)
            .map(|pid| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let cpu = rng.random_range(1..=self.max_cpu_time.max(1));
                let (freq, dur) = if rng.random_bool(io_p) {
                    (
                        rng.random_range(1..=self.max_io_frequency.max(1)),
                        rng.random_range(0..=self.max_io_duration),
                    )
                } else {
                    (0, 0)
                };
                ProcessRecord::new(pid as u32, arrival, cpu, freq, dur)
            })
            .collect()
    }
}

/// Renders records as a descriptor file, header included.
pub fn render_descriptors(records: &[ProcessRecord]) -> String {
    let mut out = String::from(DESCRIPTOR_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            r.pid, r.arrival_time, r.total_cpu_time, r.io_frequency, r.io_duration
        ));
    }
    out
}
