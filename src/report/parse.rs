//! Tolerant line parsing for raw access-log exports.
//!
//! Each line is conceptually `timestamp,userId,path,status,latencyMs`.
//! Structural defects (wrong field count, empty field, unparseable
//! timestamp) drop the row; numeric defects in `status`/`latencyMs` keep
//! the row with the field marked [`Numeric::Nan`]. Nothing propagates as
//! an error from the batch entry point.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use super::record::{LogRecord, Numeric};

/// Number of comma-separated fields in a well-formed line.
const FIELD_COUNT: usize = 5;

/// Structural defects that drop a row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 5 fields, got {found}")]
    FieldCount { found: usize },

    #[error("empty {name} field")]
    EmptyField { name: &'static str },

    #[error("unparseable timestamp {raw:?}")]
    Timestamp { raw: String },
}

/// Parses one trimmed, non-empty line into a record.
///
/// `status` and `latency_ms` fall back to [`Numeric::Nan`] on parse
/// failure instead of rejecting the line; only structural defects err.
pub fn parse_line(line: &str) -> Result<LogRecord, LineError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    }

    const FIELD_NAMES: [&str; FIELD_COUNT] =
        ["timestamp", "user_id", "path", "status", "latency_ms"];
    for (raw, name) in fields.iter().zip(FIELD_NAMES) {
        if raw.is_empty() {
            return Err(LineError::EmptyField { name });
        }
    }

    let timestamp = fields[0]
        .parse::<DateTime<Utc>>()
        .map_err(|_| LineError::Timestamp {
            raw: fields[0].to_string(),
        })?;

    Ok(LogRecord {
        timestamp,
        user_id: fields[1].to_string(),
        path: fields[2].to_string(),
        status: Numeric::parse(fields[3]),
        latency_ms: Numeric::parse(fields[4]),
    })
}

/// Parses a batch of raw lines into records, preserving input order.
///
/// Blank lines yield no record. An optional header line beginning with the
/// literal text `timestamp` is skipped; only the first line of the batch is
/// inspected for it. Malformed rows are dropped with a debug event.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<LogRecord> {
    let mut records = Vec::with_capacity(lines.len());

    for (idx, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        if idx == 0 && line.starts_with("timestamp") {
            continue;
        }

        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(err) => debug!(line = idx + 1, %err, "dropping malformed line"),
        }
    }

    records
}
