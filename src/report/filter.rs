use chrono::{NaiveDate, NaiveTime, TimeDelta};

use super::record::LogRecord;

/// Keeps records whose timestamp falls inside the inclusive UTC day
/// window `[from@00:00:00.000Z, to@23:59:59.999Z]`.
///
/// Both boundaries are inclusive at millisecond precision; input order is
/// preserved.
pub fn filter_range(records: Vec<LogRecord>, from: NaiveDate, to: NaiveDate) -> Vec<LogRecord> {
    let start = from.and_time(NaiveTime::MIN).and_utc();
    let end =
        to.and_time(NaiveTime::MIN).and_utc() + TimeDelta::days(1) - TimeDelta::milliseconds(1);

    records
        .into_iter()
        .filter(|record| record.timestamp >= start && record.timestamp <= end)
        .collect()
}
