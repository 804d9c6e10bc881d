//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::models::Tick;

/// What to do when a transition cannot be written to the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinkPolicy {
    /// Skip the write, count it, keep simulating.
    #[default]
    BestEffort,
    /// Abort the run with `SimError::SinkUnavailable`.
    FailFast,
}

/// When a waiting process has finished its I/O.
///
/// The waiting counter is always incremented before the comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IoCompletion {
    /// Leave Waiting once `counter >= io_duration`. Every block lasts at
    /// least one tick, so duration 0 behaves like duration 1.
    #[default]
    AtLeastOneTick,
    /// Leave Waiting only when `counter == io_duration`. Duration 0 never
    /// completes and is rejected by validation.
    Strict,
}

impl IoCompletion {
    /// Whether a waiting counter has reached the I/O duration.
    #[inline]
    pub fn is_complete(&self, waited: Tick, io_duration: Tick) -> bool {
        match self {
            IoCompletion::AtLeastOneTick => waited >= io_duration,
            IoCompletion::Strict => waited == io_duration,
        }
    }
}

/// Engine configuration.
///
/// # Example
/// ```
/// use kernel_sim::engine::{SimulationConfig, SinkPolicy};
///
/// let config = SimulationConfig::new()
///     .with_sink_policy(SinkPolicy::FailFast)
///     .with_tick_limit(10_000);
/// assert_eq!(config.tick_limit, Some(10_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Sink failure handling.
    pub sink_policy: SinkPolicy,
    /// Hard stop for `run`. `None` = run until every process terminates.
    pub tick_limit: Option<Tick>,
    /// I/O completion rule.
    pub io_completion: IoCompletion,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sink failure policy.
    pub fn with_sink_policy(mut self, policy: SinkPolicy) -> Self {
        self.sink_policy = policy;
        self
    }

    /// Sets a tick limit.
    pub fn with_tick_limit(mut self, limit: Tick) -> Self {
        self.tick_limit = Some(limit);
        self
    }

    /// Sets the I/O completion rule.
    pub fn with_io_completion(mut self, rule: IoCompletion) -> Self {
        self.io_completion = rule;
        self
    }
}
