use std::collections::HashMap;

use chrono::NaiveDate;

use super::bucket::Zone;
use super::record::{LogRecord, Numeric};
use super::summary::PathSummary;

/// Aggregation key: report-zone calendar date plus request path.
///
/// A genuine composite key, so path text can never collide with the date
/// component the way a concatenated string key could.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub date: NaiveDate,
    pub path: String,
}

/// Running totals for one (date, path) group, local to a single run.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    sum: Numeric,
    count: u64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            sum: Numeric::Value(0),
            count: 0,
        }
    }
}

/// Buckets each record into the report zone and accumulates count and
/// latency sum per (date, path).
///
/// Emits one summary per key with `avg_latency = round(sum / count)`; a
/// `Nan` latency anywhere in the group makes the average `Nan`. The order
/// of the emitted groups is unspecified; the ranker imposes the final
/// total order.
pub fn group_by_date_path(records: &[LogRecord], zone: Zone) -> Vec<PathSummary> {
    let mut groups: HashMap<GroupKey, Accumulator> = HashMap::new();

    for record in records {
        let key = GroupKey {
            date: zone.bucket_date(record.timestamp),
            path: record.path.clone(),
        };
        let acc = groups.entry(key).or_default();
        acc.sum = acc.sum.add(record.latency_ms);
        acc.count += 1;
    }

    groups
        .into_iter()
        .map(|(key, acc)| PathSummary {
            date: key.date,
            path: key.path,
            count: acc.count,
            avg_latency: acc.sum.div_round(acc.count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn record(ts: &str, path: &str, latency: Numeric) -> LogRecord {
        LogRecord {
            timestamp: ts.parse::<DateTime<Utc>>().expect("test instant"),
            user_id: "u1".into(),
            path: path.into(),
            status: Numeric::Value(200),
            latency_ms: latency,
        }
    }

    fn find<'a>(summaries: &'a [PathSummary], date: &str, path: &str) -> &'a PathSummary {
        let date: NaiveDate = date.parse().expect("test date");
        summaries
            .iter()
            .find(|s| s.date == date && s.path == path)
            .expect("group present")
    }

    #[test]
    fn test_count_and_average() {
        let records = vec![
            record("2025-01-01T10:00:00Z", "/api/orders", Numeric::Value(100)),
            record("2025-01-01T11:00:00Z", "/api/orders", Numeric::Value(200)),
        ];
        let summaries = group_by_date_path(&records, Zone::Jst);
        assert_eq!(summaries.len(), 1);

        let group = find(&summaries, "2025-01-01", "/api/orders");
        assert_eq!(group.count, 2);
        assert_eq!(group.avg_latency, Numeric::Value(150));
    }

    #[test]
    fn test_average_rounds_half_up() {
        let records = vec![
            record("2025-01-01T10:00:00Z", "/api/orders", Numeric::Value(100)),
            record("2025-01-01T11:00:00Z", "/api/orders", Numeric::Value(201)),
        ];
        let summaries = group_by_date_path(&records, Zone::Jst);
        assert_eq!(
            find(&summaries, "2025-01-01", "/api/orders").avg_latency,
            Numeric::Value(151)
        );
    }

    #[test]
    fn test_nan_latency_contaminates_group() {
        let records = vec![
            record("2025-01-01T10:00:00Z", "/api/orders", Numeric::Value(100)),
            record("2025-01-01T11:00:00Z", "/api/orders", Numeric::Nan),
        ];
        let summaries = group_by_date_path(&records, Zone::Jst);

        let group = find(&summaries, "2025-01-01", "/api/orders");
        assert_eq!(group.count, 2);
        assert_eq!(group.avg_latency, Numeric::Nan);
    }

    #[test]
    fn test_nan_contamination_is_per_group() {
        let records = vec![
            record("2025-01-01T10:00:00Z", "/api/orders", Numeric::Nan),
            record("2025-01-01T11:00:00Z", "/api/users", Numeric::Value(40)),
        ];
        let summaries = group_by_date_path(&records, Zone::Jst);
        assert_eq!(
            find(&summaries, "2025-01-01", "/api/orders").avg_latency,
            Numeric::Nan
        );
        assert_eq!(
            find(&summaries, "2025-01-01", "/api/users").avg_latency,
            Numeric::Value(40)
        );
    }

    #[test]
    fn test_zone_splits_groups_across_dates() {
        // 20:00Z is Jan 2 in JST but Jan 1 in ICT.
        let records = vec![record(
            "2025-01-01T20:00:00Z",
            "/api/orders",
            Numeric::Value(100),
        )];

        let jst = group_by_date_path(&records, Zone::Jst);
        assert_eq!(jst[0].date, "2025-01-02".parse::<NaiveDate>().unwrap());

        let ict = group_by_date_path(&records, Zone::Ict);
        assert_eq!(ict[0].date, "2025-01-01".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn test_same_path_different_dates_are_distinct_groups() {
        let records = vec![
            record("2025-01-01T01:00:00Z", "/api/orders", Numeric::Value(10)),
            record("2025-01-02T01:00:00Z", "/api/orders", Numeric::Value(30)),
        ];
        let summaries = group_by_date_path(&records, Zone::Jst);
        assert_eq!(summaries.len(), 2);
        assert_eq!(
            find(&summaries, "2025-01-01", "/api/orders").avg_latency,
            Numeric::Value(10)
        );
        assert_eq!(
            find(&summaries, "2025-01-02", "/api/orders").avg_latency,
            Numeric::Value(30)
        );
    }

    #[test]
    fn test_no_empty_groups() {
        let summaries = group_by_date_path(&[], Zone::Ict);
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_group_key_as_map_key() {
        let mut map: HashMap<GroupKey, u64> = HashMap::new();
        let key = GroupKey {
            date: "2025-01-01".parse().unwrap(),
            path: "/api/orders".into(),
        };
        map.insert(key.clone(), 42);
        assert_eq!(map.get(&key), Some(&42));
    }
}
