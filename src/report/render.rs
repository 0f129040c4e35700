//! Rendering of the final summary sequence.
//!
//! The pipeline's obligation ends at the ordered `Vec<PathSummary>`; this
//! module turns it into pretty JSON for machines or an aligned table for
//! terminals.

use std::fmt::Write as _;
use std::str::FromStr;

use anyhow::{Context, Result};
use thiserror::Error;

use super::summary::PathSummary;

/// Output encodings for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Raised for an output format the report does not support.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown output format {0:?} (expected \"json\" or \"table\")")]
pub struct FormatError(String);

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            other => Err(FormatError(other.to_string())),
        }
    }
}

/// Renders the ordered summary sequence in the requested encoding.
pub fn render(summaries: &[PathSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(summaries).context("encoding report as JSON")
        }
        OutputFormat::Table => Ok(render_table(summaries)),
    }
}

/// Aligned text table; contaminated averages print as `NaN`.
fn render_table(summaries: &[PathSummary]) -> String {
    if summaries.is_empty() {
        return "no matching requests".to_string();
    }

    let path_width = summaries
        .iter()
        .map(|s| s.path.len())
        .chain(std::iter::once("path".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10}  {:<path_width$}  {:>7}  {:>11}",
        "date", "path", "count", "avg_latency"
    );
    for summary in summaries {
        let _ = writeln!(
            out,
            "{:<10}  {:<path_width$}  {:>7}  {:>11}",
            summary.date.format("%Y-%m-%d"),
            summary.path,
            summary.count,
            summary.avg_latency.to_string(),
        );
    }

    // Drop the trailing newline; callers println! the result.
    out.pop();
    out
}
