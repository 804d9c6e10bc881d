//! Single-CPU lifecycle simulation.
//!
//! # Algorithm
//!
//! Each tick evaluates four stages in a fixed order, then advances the clock:
//!
//! 1. **New → Ready**: records whose arrival time equals the clock, in New order.
//! 2. **Waiting → Ready**: every waiting counter is incremented first; records
//!    whose I/O is complete leave Waiting regardless of position.
//! 3. **Running → Terminated / Waiting**: the running record consumes one CPU
//!    tick. Finishing wins over blocking when both happen in the same tick.
//! 4. **Ready → Running**: if the CPU is idle, the front of Ready is dispatched
//!    and its burst counter starts at zero.
//!
//! Stage 4 sees records readied by stages 1-3 of the same tick, so a process
//! can arrive and be dispatched in one tick. Each stage collects its movers
//! before touching the queues, so survivors keep their relative order.
//!
//! # Complexity
//! O(n) per tick where n = number of records.

use log::{debug, info, trace, warn};
use serde::Serialize;

use super::config::{SimulationConfig, SinkPolicy};
use crate::error::SimError;
use crate::io::TransitionSink;
use crate::models::{Pid, ProcessRecord, ProcessState, Tick, Transition};
use crate::queue::StageQueue;
use crate::validation::validate_records;

/// Index of a record in the engine's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Handle(usize);

/// Number of records in each stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageSizes {
    /// Loaded, not yet arrived.
    pub new: usize,
    /// Queued for the CPU.
    pub ready: usize,
    /// On the CPU (0 or 1).
    pub running: usize,
    /// Blocked on I/O.
    pub waiting: usize,
    /// Finished.
    pub terminated: usize,
}

impl StageSizes {
    /// Sum over all stages.
    pub fn total(&self) -> usize {
        self.new + self.ready + self.running + self.waiting + self.terminated
    }
}

/// Result of one [`Simulation::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Clock value of the tick that was executed.
    pub time: Tick,
    /// Transitions made during the tick, in stage order.
    pub transitions: Vec<Transition>,
    /// Stage sizes at the end of the tick.
    pub sizes: StageSizes,
}

/// Summary of a completed [`Simulation::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationOutcome {
    /// Clock value of the final tick (the last termination).
    pub makespan: Tick,
    /// Number of ticks executed.
    pub ticks: Tick,
    /// Transitions handed to the sink, including dropped ones.
    pub transitions: usize,
    /// Transitions the sink failed to record (best-effort policy only).
    pub dropped_writes: usize,
}

/// The simulation engine.
///
/// Owns every [`ProcessRecord`] for the lifetime of the run; stage queues
/// hold handles into that arena. Records are only mutated here.
///
/// # Example
///
/// ```
/// use kernel_sim::engine::Simulation;
/// use kernel_sim::models::{ProcessRecord, ProcessState};
///
/// let mut sim = Simulation::new(vec![
///     ProcessRecord::new(1, 0, 2, 0, 0),
///     ProcessRecord::new(2, 0, 2, 0, 0),
/// ])
/// .unwrap();
///
/// let tick0 = sim.step().unwrap();
/// assert_eq!(tick0.transitions.len(), 3); // two arrivals, one dispatch
/// assert_eq!(sim.state_of(1), Some(ProcessState::Running));
/// assert_eq!(sim.state_of(2), Some(ProcessState::Ready));
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    records: Vec<ProcessRecord>,
    new: StageQueue<Handle>,
    ready: StageQueue<Handle>,
    running: StageQueue<Handle>,
    waiting: StageQueue<Handle>,
    terminated: StageQueue<Handle>,
    /// Ticks the running record has spent in its current burst.
    burst_time: Tick,
    clock: Tick,
    config: SimulationConfig,
}

impl Simulation {
    /// Creates a simulation with the default configuration.
    ///
    /// # Errors
    /// See [`Simulation::with_config`].
    pub fn new(records: Vec<ProcessRecord>) -> Result<Self, SimError> {
        Self::with_config(records, SimulationConfig::default())
    }

    /// Creates a simulation with all records in New, in the given order.
    ///
    /// # Errors
    /// - [`SimError::EmptyWorkload`] if `records` is empty.
    /// - [`SimError::InvalidWorkload`] if validation fails.
    ///
    /// A record with zero CPU demand is accepted. It still passes through
    /// Ready and Running, and terminates after one tick on the CPU.
    pub fn with_config(
        records: Vec<ProcessRecord>,
        config: SimulationConfig,
    ) -> Result<Self, SimError> {
        if records.is_empty() {
            return Err(SimError::EmptyWorkload);
        }
        validate_records(&records, config.io_completion).map_err(SimError::InvalidWorkload)?;
        for r in records.iter().filter(|r| r.total_cpu_time == 0) {
            warn!(
                "process {} needs no CPU time; it terminates on its first running tick",
                r.pid
            );
        }

        let new = (0..records.len()).map(Handle).collect();
        Ok(Self {
            records,
            new,
            ready: StageQueue::new(),
            running: StageQueue::new(),
            waiting: StageQueue::new(),
            terminated: StageQueue::new(),
            burst_time: 0,
            clock: 0,
            config,
        })
    }

    /// Executes one tick and advances the clock.
    ///
    /// # Errors
    /// [`SimError::Invariant`] if a stage leaves the queues inconsistent.
    pub fn step(&mut self) -> Result<TickReport, SimError> {
        let now = self.clock;
        let mut transitions = Vec::new();

        // Stage 1: arrivals
        let records = &self.records;
        let arrived = self
            .new
            .extract_where(|h| records[h.0].arrival_time == now);
        for h in arrived {
            self.ready.enqueue(h);
            transitions.push(self.transition(h, ProcessState::New, ProcessState::Ready));
        }

        // Stage 2: I/O completions
        for h in self.waiting.iter() {
            self.records[h.0].wait_one_tick();
        }
        let rule = self.config.io_completion;
        let records = &self.records;
        let completed = self.waiting.extract_where(|h| {
            let r = &records[h.0];
            rule.is_complete(r.waiting_time(), r.io_duration)
        });
        for h in completed {
            self.records[h.0].reset_waiting_time();
            self.ready.enqueue(h);
            transitions.push(self.transition(h, ProcessState::Waiting, ProcessState::Ready));
        }

        // Stage 3: the running burst
        if let Some(&h) = self.running.front() {
            let remaining = self.records[h.0].run_one_tick();
            self.burst_time += 1;

            if remaining == 0 {
                self.running.dequeue()?;
                self.terminated.enqueue(h);
                transitions.push(self.transition(
                    h,
                    ProcessState::Running,
                    ProcessState::Terminated,
                ));
            } else if self.burst_time == self.records[h.0].io_frequency {
                self.running.dequeue()?;
                self.waiting.enqueue(h);
                transitions.push(self.transition(h, ProcessState::Running, ProcessState::Waiting));
            }
        }

        // Stage 4: dispatch
        if self.running.is_empty() && !self.ready.is_empty() {
            let h = self.ready.dequeue()?;
            self.running.enqueue(h);
            self.burst_time = 0;
            transitions.push(self.transition(h, ProcessState::Ready, ProcessState::Running));
        }

        let sizes = self.stage_sizes();
        self.check_invariants(&sizes)?;

        for t in &transitions {
            debug!("t={} pid={} {} -> {}", t.time, t.pid, t.from, t.to);
        }
        trace!("t={now} sizes={sizes:?}");

        self.clock += 1;
        Ok(TickReport {
            time: now,
            transitions,
            sizes,
        })
    }

    /// Runs until every record is terminated, writing each transition to `sink`.
    ///
    /// # Errors
    /// - [`SimError::TickLimitExceeded`] if a configured limit is reached.
    /// - [`SimError::SinkUnavailable`] on a failed write under `SinkPolicy::FailFast`.
    /// - [`SimError::Invariant`] on an engine defect.
    pub fn run<S: TransitionSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<SimulationOutcome, SimError> {
        info!(
            "simulating {} process(es) from t={}",
            self.records.len(),
            self.clock
        );
        let start = self.clock;
        let mut emitted = 0;
        let mut dropped = 0;

        while !self.is_finished() {
            if let Some(limit) = self.config.tick_limit {
                if self.clock >= limit {
                    return Err(SimError::TickLimitExceeded { limit });
                }
            }

            let report = self.step()?;
            for t in &report.transitions {
                emitted += 1;
                if let Err(e) = sink.emit(t) {
                    match self.config.sink_policy {
                        SinkPolicy::FailFast => return Err(SimError::SinkUnavailable(e)),
                        SinkPolicy::BestEffort => {
                            warn!(
                                "dropped transition t={} pid={} {} -> {}: {e}",
                                t.time, t.pid, t.from, t.to
                            );
                            dropped += 1;
                        }
                    }
                }
            }
        }

        let outcome = SimulationOutcome {
            makespan: self.clock.saturating_sub(1),
            ticks: self.clock - start,
            transitions: emitted,
            dropped_writes: dropped,
        };
        info!(
            "all {} process(es) terminated at t={} ({} transitions, {} dropped)",
            self.records.len(),
            outcome.makespan,
            outcome.transitions,
            outcome.dropped_writes
        );
        Ok(outcome)
    }

    /// Whether every record has terminated.
    pub fn is_finished(&self) -> bool {
        self.terminated.len() == self.records.len()
    }

    /// Clock value of the next tick to execute.
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Engine configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// All records, in load order.
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// Number of records.
    pub fn process_count(&self) -> usize {
        self.records.len()
    }

    /// Finds a record by PID.
    pub fn record(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.pid == pid)
    }

    /// Current stage of a record.
    pub fn state_of(&self, pid: Pid) -> Option<ProcessState> {
        let h = Handle(self.records.iter().position(|r| r.pid == pid)?);
        let stages = [
            (&self.new, ProcessState::New),
            (&self.ready, ProcessState::Ready),
            (&self.running, ProcessState::Running),
            (&self.waiting, ProcessState::Waiting),
            (&self.terminated, ProcessState::Terminated),
        ];
        stages
            .iter()
            .find(|(q, _)| q.contains(&h))
            .map(|(_, state)| *state)
    }

    /// PID on the CPU, if any.
    pub fn running_pid(&self) -> Option<Pid> {
        self.running.front().map(|h| self.records[h.0].pid)
    }

    /// Ready PIDs, front first.
    pub fn ready_pids(&self) -> Vec<Pid> {
        self.pids(&self.ready)
    }

    /// Waiting PIDs, in queue order.
    pub fn waiting_pids(&self) -> Vec<Pid> {
        self.pids(&self.waiting)
    }

    /// PIDs in termination order.
    pub fn terminated_pids(&self) -> Vec<Pid> {
        self.pids(&self.terminated)
    }

    /// Current size of every stage.
    pub fn stage_sizes(&self) -> StageSizes {
        StageSizes {
            new: self.new.len(),
            ready: self.ready.len(),
            running: self.running.len(),
            waiting: self.waiting.len(),
            terminated: self.terminated.len(),
        }
    }

    fn pids(&self, queue: &StageQueue<Handle>) -> Vec<Pid> {
        queue.iter().map(|h| self.records[h.0].pid).collect()
    }

    fn transition(&self, h: Handle, from: ProcessState, to: ProcessState) -> Transition {
        Transition::new(self.clock, self.records[h.0].pid, from, to)
    }

    fn check_invariants(&self, sizes: &StageSizes) -> Result<(), SimError> {
        if sizes.running > 1 {
            return Err(SimError::Invariant(format!(
                "{} records running at t={}",
                sizes.running, self.clock
            )));
        }
        if sizes.total() != self.records.len() {
            return Err(SimError::Invariant(format!(
                "stage sizes sum to {} but {} records are loaded (t={})",
                sizes.total(),
                self.records.len(),
                self.clock
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::IoCompletion;
    use crate::io::{MemorySink, TextLogSink};
    use crate::validation::ValidationErrorKind;
    use std::io;
    use ProcessState::*;

    struct FailingSink;

    impl TransitionSink for FailingSink {
        fn emit(&mut self, _transition: &Transition) -> io::Result<()> {
            Err(io::Error::other("log device gone"))
        }
    }

    fn run(records: Vec<ProcessRecord>) -> (Simulation, MemorySink, SimulationOutcome) {
        let mut sim = Simulation::new(records).unwrap();
        let mut sink = MemorySink::new();
        let outcome = sim.run(&mut sink).unwrap();
        (sim, sink, outcome)
    }

    fn timeline(sink: &MemorySink, pid: Pid) -> Vec<(Tick, ProcessState, ProcessState)> {
        sink.transitions_for(pid)
            .iter()
            .map(|t| (t.time, t.from, t.to))
            .collect()
    }

    #[test]
    fn test_single_process_no_io() {
        let (sim, sink, outcome) = run(vec![ProcessRecord::new(1, 0, 3, 100, 0)]);

        assert_eq!(
            timeline(&sink, 1),
            vec![(0, New, Ready), (0, Ready, Running), (3, Running, Terminated)]
        );
        assert_eq!(outcome.makespan, 3);
        assert_eq!(outcome.ticks, 4);
        assert_eq!(outcome.transitions, 3);
        assert_eq!(outcome.dropped_writes, 0);
        assert!(sim.is_finished());
        assert_eq!(sim.record(1).unwrap().remaining_cpu_time(), 0);
    }

    #[test]
    fn test_rendered_log() {
        let mut sim = Simulation::new(vec![ProcessRecord::new(1, 0, 3, 100, 0)]).unwrap();
        let mut sink = TextLogSink::new(Vec::new()).unwrap();
        sim.run(&mut sink).unwrap();
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();

        assert_eq!(
            text,
            "Time  PID  Old State  New State \n\
             0     1    New        Ready     \n\
             0     1    Ready      Running   \n\
             3     1    Running    Terminated\n"
        );
    }

    #[test]
    fn test_fcfs_two_processes() {
        let (sim, sink, _) = run(vec![
            ProcessRecord::new(1, 0, 2, 100, 0),
            ProcessRecord::new(2, 0, 2, 100, 0),
        ]);

        assert_eq!(
            timeline(&sink, 1),
            vec![(0, New, Ready), (0, Ready, Running), (2, Running, Terminated)]
        );
        assert_eq!(
            timeline(&sink, 2),
            vec![(0, New, Ready), (2, Ready, Running), (4, Running, Terminated)]
        );
        assert_eq!(sim.terminated_pids(), vec![1, 2]);
    }

    #[test]
    fn test_io_block_and_resume() {
        let (_, sink, outcome) = run(vec![ProcessRecord::new(1, 0, 5, 2, 3)]);

        assert_eq!(
            timeline(&sink, 1),
            vec![
                (0, New, Ready),
                (0, Ready, Running),
                (2, Running, Waiting),
                (5, Waiting, Ready),
                (5, Ready, Running),
                (7, Running, Waiting),
                (10, Waiting, Ready),
                (10, Ready, Running),
                (11, Running, Terminated),
            ]
        );
        assert_eq!(outcome.makespan, 11);
    }

    #[test]
    fn test_termination_wins_over_io() {
        // Burst counter hits io_frequency on the same tick the CPU demand runs out
        let (_, sink, _) = run(vec![ProcessRecord::new(1, 0, 2, 2, 5)]);
        assert_eq!(sink.count(1, Running, Waiting), 0);
        assert_eq!(
            timeline(&sink, 1).last(),
            Some(&(2, Running, Terminated))
        );
    }

    #[test]
    fn test_same_tick_arrival_and_dispatch() {
        let (_, sink, _) = run(vec![ProcessRecord::new(1, 3, 1, 0, 0)]);
        assert_eq!(
            timeline(&sink, 1),
            vec![(3, New, Ready), (3, Ready, Running), (4, Running, Terminated)]
        );
    }

    #[test]
    fn test_arrivals_keep_input_order() {
        let mut sim = Simulation::new(vec![
            ProcessRecord::new(1, 2, 1, 0, 0),
            ProcessRecord::new(2, 0, 4, 0, 0),
            ProcessRecord::new(3, 0, 1, 0, 0),
        ])
        .unwrap();

        let tick0 = sim.step().unwrap();
        let arrivals: Vec<Pid> = tick0
            .transitions
            .iter()
            .filter(|t| t.is(New, Ready))
            .map(|t| t.pid)
            .collect();
        assert_eq!(arrivals, vec![2, 3]);
        assert_eq!(sim.running_pid(), Some(2));
        assert_eq!(sim.ready_pids(), vec![3]);
        assert_eq!(sim.state_of(1), Some(New));

        sim.step().unwrap();
        sim.step().unwrap();
        // pid 1 arrives at t=2 behind pid 3
        assert_eq!(sim.ready_pids(), vec![3, 1]);
    }

    #[test]
    fn test_waiting_exit_out_of_order() {
        let (sim, sink, _) = run(vec![
            ProcessRecord::new(1, 0, 3, 1, 5),
            ProcessRecord::new(2, 0, 3, 1, 1),
        ]);

        let first_io_return = sink
            .transitions()
            .iter()
            .find(|t| t.is(Waiting, Ready))
            .unwrap();
        assert_eq!((first_io_return.time, first_io_return.pid), (3, 2));

        assert_eq!(
            timeline(&sink, 1)[..4],
            [(0, New, Ready), (0, Ready, Running), (1, Running, Waiting), (6, Waiting, Ready)]
        );
        assert_eq!(timeline(&sink, 2).last(), Some(&(6, Running, Terminated)));
        assert_eq!(sim.terminated_pids(), vec![2, 1]);
    }

    #[test]
    fn test_zero_io_duration_waits_one_tick() {
        let (_, sink, outcome) = run(vec![ProcessRecord::new(1, 0, 3, 1, 0)]);
        assert_eq!(
            timeline(&sink, 1)[..5],
            [
                (0, New, Ready),
                (0, Ready, Running),
                (1, Running, Waiting),
                (2, Waiting, Ready),
                (2, Ready, Running),
            ]
        );
        assert_eq!(outcome.makespan, 5);
    }

    #[test]
    fn test_zero_io_duration_equals_one() {
        let (_, zero, _) = run(vec![ProcessRecord::new(1, 0, 4, 1, 0)]);
        let (_, one, _) = run(vec![ProcessRecord::new(1, 0, 4, 1, 1)]);
        assert_eq!(zero.transitions(), one.transitions());
    }

    #[test]
    fn test_zero_io_frequency_never_blocks() {
        let (_, sink, _) = run(vec![ProcessRecord::new(1, 0, 4, 0, 2)]);
        assert_eq!(sink.count(1, Running, Waiting), 0);
        assert_eq!(sink.transitions().len(), 3);
    }

    #[test]
    fn test_idle_cpu_gap() {
        let (_, sink, outcome) = run(vec![
            ProcessRecord::new(1, 0, 1, 0, 0),
            ProcessRecord::new(2, 5, 1, 0, 0),
        ]);
        assert_eq!(timeline(&sink, 1).last(), Some(&(1, Running, Terminated)));
        assert_eq!(timeline(&sink, 2)[1], (5, Ready, Running));
        assert_eq!(outcome.makespan, 6);
    }

    #[test]
    fn test_io_overlaps_with_other_process() {
        let (_, sink, _) = run(vec![
            ProcessRecord::new(1, 0, 4, 2, 2),
            ProcessRecord::new(2, 0, 3, 100, 0),
        ]);
        // pid 1 blocks at t=2, pid 2 takes the CPU in the same tick
        assert_eq!(timeline(&sink, 1)[2], (2, Running, Waiting));
        assert_eq!(timeline(&sink, 2)[1], (2, Ready, Running));
        // pid 1 returns at t=4 but waits for pid 2 (non-preemptive)
        assert_eq!(timeline(&sink, 1)[3], (4, Waiting, Ready));
        assert_eq!(timeline(&sink, 2)[2], (5, Running, Terminated));
        assert_eq!(timeline(&sink, 1)[4], (5, Ready, Running));
    }

    #[test]
    fn test_step_reports_sizes() {
        let mut sim = Simulation::new(vec![
            ProcessRecord::new(1, 0, 2, 1, 1),
            ProcessRecord::new(2, 1, 1, 0, 0),
        ])
        .unwrap();

        let r0 = sim.step().unwrap();
        assert_eq!(r0.time, 0);
        assert_eq!(
            r0.sizes,
            StageSizes {
                new: 1,
                ready: 0,
                running: 1,
                waiting: 0,
                terminated: 0
            }
        );

        let r1 = sim.step().unwrap();
        // pid 2 arrives, pid 1 blocks, pid 2 dispatched
        assert_eq!(r1.sizes.waiting, 1);
        assert_eq!(r1.sizes.running, 1);
        assert_eq!(sim.state_of(1), Some(Waiting));
        assert_eq!(sim.waiting_pids(), vec![1]);
        assert_eq!(sim.clock(), 2);
    }

    #[test]
    fn test_empty_workload_rejected() {
        assert!(matches!(
            Simulation::new(Vec::new()),
            Err(SimError::EmptyWorkload)
        ));
    }

    #[test]
    fn test_invalid_workload_rejected() {
        let err = Simulation::new(vec![
            ProcessRecord::new(1, 0, 2, 0, 0),
            ProcessRecord::new(1, 1, 2, 0, 0),
        ])
        .unwrap_err();
        match err {
            SimError::InvalidWorkload(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::DuplicatePid)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_finished_records_cannot_be_rerun() {
        let (sim, _, _) = run(vec![ProcessRecord::new(1, 0, 3, 0, 0)]);
        let err = Simulation::new(sim.records().to_vec()).unwrap_err();
        match err {
            SimError::InvalidWorkload(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::InconsistentCounters)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_deserialized_counters_are_checked() {
        let json = r#"{"pid":1,"arrival_time":0,"total_cpu_time":3,"io_frequency":0,
                       "io_duration":0,"remaining_cpu_time":7,"waiting_time":0}"#;
        let record: ProcessRecord = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Simulation::new(vec![record]),
            Err(SimError::InvalidWorkload(_))
        ));
    }

    #[test]
    fn test_zero_cpu_record_still_halts() {
        let (sim, sink, outcome) = run(vec![
            ProcessRecord::new(1, 0, 0, 0, 0),
            ProcessRecord::new(2, 0, 2, 0, 0),
        ]);
        assert_eq!(
            timeline(&sink, 1),
            vec![(0, New, Ready), (0, Ready, Running), (1, Running, Terminated)]
        );
        assert_eq!(
            timeline(&sink, 2),
            vec![(0, New, Ready), (1, Ready, Running), (3, Running, Terminated)]
        );
        assert_eq!(outcome.makespan, 3);
        assert_eq!(sim.record(1).unwrap().consumed_cpu_time(), 0);
    }

    #[test]
    fn test_strict_io_completion() {
        let config = SimulationConfig::new().with_io_completion(IoCompletion::Strict);
        assert!(Simulation::with_config(vec![ProcessRecord::new(1, 0, 3, 1, 0)], config.clone())
            .is_err());

        let mut sim =
            Simulation::with_config(vec![ProcessRecord::new(1, 0, 5, 2, 3)], config).unwrap();
        let mut sink = MemorySink::new();
        sim.run(&mut sink).unwrap();
        assert_eq!(sink.count(1, Waiting, Ready), 2);
    }

    #[test]
    fn test_tick_limit() {
        let config = SimulationConfig::new().with_tick_limit(3);
        let mut sim =
            Simulation::with_config(vec![ProcessRecord::new(1, 0, 10, 0, 0)], config).unwrap();
        let err = sim.run(&mut MemorySink::new()).unwrap_err();
        assert!(matches!(err, SimError::TickLimitExceeded { limit: 3 }));
        assert_eq!(sim.clock(), 3);
    }

    #[test]
    fn test_best_effort_sink_keeps_simulating() {
        let mut sim = Simulation::new(vec![ProcessRecord::new(1, 0, 3, 100, 0)]).unwrap();
        let outcome = sim.run(&mut FailingSink).unwrap();
        assert!(sim.is_finished());
        assert_eq!(outcome.transitions, 3);
        assert_eq!(outcome.dropped_writes, 3);
    }

    #[test]
    fn test_fail_fast_sink_aborts() {
        let config = SimulationConfig::new().with_sink_policy(SinkPolicy::FailFast);
        let mut sim =
            Simulation::with_config(vec![ProcessRecord::new(1, 0, 3, 100, 0)], config).unwrap();
        let err = sim.run(&mut FailingSink).unwrap_err();
        assert!(matches!(err, SimError::SinkUnavailable(_)));
        assert!(!sim.is_finished());
    }

    #[test]
    fn test_run_after_finish_is_noop() {
        let (mut sim, _, first) = run(vec![ProcessRecord::new(1, 0, 2, 0, 0)]);
        let mut sink = MemorySink::new();
        let second = sim.run(&mut sink).unwrap();
        assert!(sink.transitions().is_empty());
        assert_eq!(second.makespan, first.makespan);
        assert_eq!(second.ticks, 0);
    }

    #[test]
    fn test_lookup_unknown_pid() {
        let sim = Simulation::new(vec![ProcessRecord::new(1, 0, 2, 0, 0)]).unwrap();
        assert!(sim.record(9).is_none());
        assert!(sim.state_of(9).is_none());
        assert_eq!(sim.process_count(), 1);
    }
}
