use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::summary::PathSummary;

/// Orders two summaries by count descending, then path ascending.
fn by_count_then_path(a: &PathSummary, b: &PathSummary) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.path.cmp(&b.path))
}

/// Keeps the `top` busiest paths per date, then imposes the final total
/// order: date ascending, count descending, path ascending.
///
/// Two phases on purpose: the per-date truncation happens against the
/// per-date ordering, and the concatenated result is re-sorted globally so
/// the output is independent of which dates are present or how many groups
/// each one has. Partitions smaller than `top` are emitted whole, never
/// padded.
pub fn rank_top(summaries: Vec<PathSummary>, top: usize) -> Vec<PathSummary> {
    let mut by_date: BTreeMap<NaiveDate, Vec<PathSummary>> = BTreeMap::new();
    for summary in summaries {
        by_date.entry(summary.date).or_default().push(summary);
    }

    let mut ranked = Vec::new();
    for (_, mut partition) in by_date {
        partition.sort_by(by_count_then_path);
        partition.truncate(top);
        ranked.extend(partition);
    }

    ranked.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| by_count_then_path(a, b)));
    ranked
}
