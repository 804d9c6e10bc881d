//! Transition log sinks.
//!
//! # Format
//!
//! Four left-justified columns of width 5, 4, 10 and 10, separated by one
//! space:
//!
//! ```text
//! Time  PID  Old State  New State
//! 0     1    New        Ready
//! 0     1    Ready      Running
//! 3     1    Running    Terminated
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::models::{Pid, ProcessState, Tick, Transition};

/// Receives one call per state change, in emission order.
pub trait TransitionSink {
    /// Records one transition.
    fn emit(&mut self, transition: &Transition) -> io::Result<()>;
}

impl<S: TransitionSink + ?Sized> TransitionSink for &mut S {
    fn emit(&mut self, transition: &Transition) -> io::Result<()> {
        (**self).emit(transition)
    }
}

/// Column header line (without newline).
pub fn format_header() -> String {
    format!(
        "{:<5} {:<4} {:<10} {:<10}",
        "Time", "PID", "Old State", "New State"
    )
}

/// One log line (without newline).
pub fn format_transition(t: &Transition) -> String {
    format!("{:<5} {:<4} {:<10} {:<10}", t.time, t.pid, t.from, t.to)
}

/// Emits a transition built from its parts.
pub fn emit_transition<S: TransitionSink + ?Sized>(
    sink: &mut S,
    time: Tick,
    pid: Pid,
    old_state: ProcessState,
    new_state: ProcessState,
) -> io::Result<()> {
    sink.emit(&Transition::new(time, pid, old_state, new_state))
}

/// Writes the fixed-width log to any writer.
///
/// The header is written on construction.
#[derive(Debug)]
pub struct TextLogSink<W: Write> {
    writer: W,
}

impl<W: Write> TextLogSink<W> {
    /// Wraps `writer` and writes the header line.
    pub fn new(mut writer: W) -> io::Result<Self> {
        writeln!(writer, "{}", format_header())?;
        Ok(Self { writer })
    }

    /// Flushes and returns the wrapped writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> TransitionSink for TextLogSink<W> {
    fn emit(&mut self, transition: &Transition) -> io::Result<()> {
        writeln!(self.writer, "{}", format_transition(transition))
    }
}

/// Writes the fixed-width log to a file path.
///
/// The file is truncated and given a header once, then reopened in append
/// mode for every transition, so a write that cannot open the file fails on
/// its own without poisoning later writes.
#[derive(Debug, Clone)]
pub struct FileLogSink {
    path: PathBuf,
}

impl FileLogSink {
    /// Creates (or truncates) `path` and writes the header line.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::create(&path)?;
        writeln!(file, "{}", format_header())?;
        Ok(Self { path })
    }

    /// Log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransitionSink for FileLogSink {
    fn emit(&mut self, transition: &Transition) -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}", format_transition(transition))
    }
}

/// Collects transitions in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    transitions: Vec<Transition>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions received so far, in order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Transitions of one process, in order.
    pub fn transitions_for(&self, pid: Pid) -> Vec<&Transition> {
        self.transitions.iter().filter(|t| t.pid == pid).collect()
    }

    /// Number of `from` → `to` transitions of one process.
    pub fn count(&self, pid: Pid, from: ProcessState, to: ProcessState) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.pid == pid && t.is(from, to))
            .count()
    }

    /// Renders the full log, header included.
    pub fn render(&self) -> String {
        let mut out = format_header();
        out.push('\n');
        for t in &self.transitions {
            out.push_str(&format_transition(t));
            out.push('\n');
        }
        out
    }
}

impl TransitionSink for MemorySink {
    fn emit(&mut self, transition: &Transition) -> io::Result<()> {
        self.transitions.push(*transition);
        Ok(())
    }
}

/// Forwards every transition to two sinks.
///
/// Both sinks see every transition; the first error is returned.
#[derive(Debug)]
pub struct TeeSink<A, B> {
    /// First sink.
    pub primary: A,
    /// Second sink.
    pub secondary: B,
}

impl<A: TransitionSink, B: TransitionSink> TeeSink<A, B> {
    /// Combines two sinks.
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: TransitionSink, B: TransitionSink> TransitionSink for TeeSink<A, B> {
    fn emit(&mut self, transition: &Transition) -> io::Result<()> {
        let first = self.primary.emit(transition);
        let second = self.secondary.emit(transition);
        first.and(second)
    }
}
