use chrono::NaiveDate;
use serde::Serialize;

use super::record::Numeric;

/// One output row: traffic for a single (date, path) group that survived
/// the top-N cut.
///
/// Serializes to the report's JSON shape: `date` as `YYYY-MM-DD`, camelCase
/// field names, and `avgLatency: null` when the group's latency sum was
/// contaminated by an unparseable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSummary {
    pub date: NaiveDate,
    pub path: String,
    pub count: u64,
    pub avg_latency: Numeric,
}
