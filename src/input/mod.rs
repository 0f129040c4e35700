//! Batch line ingestion.
//!
//! The aggregation pipeline is batch-oriented: the whole input must be
//! resident before filtering begins. This module drains a file (or stdin)
//! into an ordered `Vec<String>` up front; the pipeline never sees a
//! partially-read batch.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Reads the whole input into memory as ordered raw lines.
///
/// A path of `-` reads from stdin until EOF.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    if path == Path::new("-") {
        return collect_lines(io::stdin().lock()).context("reading from stdin");
    }

    let file =
        File::open(path).with_context(|| format!("opening log file {}", path.display()))?;
    collect_lines(BufReader::new(file))
        .with_context(|| format!("reading log file {}", path.display()))
}

fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}
