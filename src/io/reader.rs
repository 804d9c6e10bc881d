//! Descriptor reader.
//!
//! # Format
//!
//! ```text
//! PID,Arrival Time,Total CPU Time,I/O Frequency,I/O Duration
//! 1,0,5,2,3
//! 2,1,3,100,0
//! ```
//!
//! Exactly one header line is skipped. Each following line holds five
//! comma-separated non-negative integers. Blank lines are ignored. The
//! first malformed, incomplete or non-UTF-8 line ends the read; everything
//! parsed before it is kept. A line with more than five fields still yields
//! its first five values, then ends the read.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::error::SimError;
use crate::models::ProcessRecord;

/// Header line of a descriptor file.
pub const DESCRIPTOR_HEADER: &str = "PID,Arrival Time,Total CPU Time,I/O Frequency,I/O Duration";

/// Parses one descriptor line. Returns `None` if it is not exactly five
/// non-negative integers.
pub fn parse_record(line: &str) -> Option<ProcessRecord> {
    match parse_leading(line)? {
        (record, false) => Some(record),
        (_, true) => None,
    }
}

/// Parses the first five fields of a line. The flag is set when more
/// fields follow them.
fn parse_leading(line: &str) -> Option<(ProcessRecord, bool)> {
    let mut fields = line.split(',').map(|f| f.trim());
    let pid = fields.next()?.parse().ok()?;
    let arrival = fields.next()?.parse().ok()?;
    let total = fields.next()?.parse().ok()?;
    let io_freq = fields.next()?.parse().ok()?;
    let io_dur = fields.next()?.parse().ok()?;
    let trailing = fields.next().is_some();
    Some((ProcessRecord::new(pid, arrival, total, io_freq, io_dur), trailing))
}

/// Reads process records from a descriptor source, in source order.
///
/// # Errors
/// Only I/O errors from the underlying reader. Malformed content ends the
/// read without an error.
pub fn load_records<R: BufRead>(mut reader: R) -> io::Result<Vec<ProcessRecord>> {
    let mut records = Vec::new();
    let mut buf = Vec::new();

    // Header, whatever its encoding
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(records);
    }

    let mut line_no = 1;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!("stopping at non-UTF-8 descriptor on line {line_no}");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_leading(line) {
            Some((record, false)) => records.push(record),
            Some((record, true)) => {
                warn!(
                    "stopping after extra fields on line {line_no}: {:?}",
                    line.trim_end()
                );
                records.push(record);
                break;
            }
            None => {
                warn!(
                    "stopping at malformed descriptor on line {line_no}: {:?}",
                    line.trim_end()
                );
                break;
            }
        }
    }

    Ok(records)
}

/// Opens `path` and reads its process records.
///
/// # Errors
/// [`SimError::SourceUnavailable`] if the file cannot be opened or read.
pub fn load_records_from_path(path: impl AsRef<Path>) -> Result<Vec<ProcessRecord>, SimError> {
    let path = path.as_ref();
    let unavailable = |source| SimError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let records = load_records(BufReader::new(file)).map_err(unavailable)?;
    info!("loaded {} process record(s) from {}", records.len(), path.display());
    Ok(records)
}
