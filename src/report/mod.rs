//! Batch aggregation pipeline for access-log lines.
//!
//! Five stages, each consuming the full output of the previous one:
//! [`parse`] turns raw lines into records and silently drops malformed
//! ones, [`filter`] applies the inclusive UTC day window, [`bucket`] maps
//! instants to report-zone dates, [`group`] accumulates count and latency
//! per (date, path), and [`rank`] keeps the top-N paths per date and
//! imposes the final total order.
//!
//! The pipeline is single-threaded, synchronous, and a pure function of
//! (lines, options): no state survives a run, and a fixed input always
//! produces byte-identical output.

pub mod bucket;
pub mod filter;
pub mod group;
pub mod parse;
pub mod rank;
pub mod record;
pub mod render;
pub mod summary;

use crate::config::ReportOptions;

use self::summary::PathSummary;

/// Runs the full pipeline over a materialized batch of raw lines.
///
/// Malformed rows are dropped inside the parser, never surfaced as errors;
/// the result is ordered by date ascending, count descending, path
/// ascending.
pub fn summarize<S: AsRef<str>>(lines: &[S], options: &ReportOptions) -> Vec<PathSummary> {
    let records = parse::parse_lines(lines);
    let in_range = filter::filter_range(records, options.from, options.to);
    let grouped = group::group_by_date_path(&in_range, options.tz);
    rank::rank_top(grouped, options.top)
}
