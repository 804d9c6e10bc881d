//! Peripheral I/O: descriptor source and transition log sinks.
//!
//! The engine only sees the narrow contracts defined here:
//! [`load_records`] produces records in file order, and
//! [`TransitionSink`] receives one call per state change.

mod reader;
mod sink;

pub use reader::{load_records, load_records_from_path, parse_record, DESCRIPTOR_HEADER};
pub use sink::{
    emit_transition, format_header, format_transition, FileLogSink, MemorySink, TeeSink,
    TextLogSink, TransitionSink,
};
