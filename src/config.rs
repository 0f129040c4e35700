use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::report::bucket::Zone;

/// Resolved report options, validated before the pipeline runs.
///
/// The pipeline itself assumes these are well-formed; everything here is
/// checked at the CLI boundary.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// First UTC calendar day of the report window (inclusive).
    pub from: NaiveDate,

    /// Last UTC calendar day of the report window (inclusive).
    pub to: NaiveDate,

    /// Fixed-offset zone used to bucket instants into report dates.
    pub tz: Zone,

    /// Rank cutoff: how many paths to keep per date.
    pub top: usize,
}

impl ReportOptions {
    /// Rejects option values the pipeline is not defined for.
    ///
    /// An inverted window (`from > to`) is accepted: the pipeline yields an
    /// empty report for it, which callers may prefer to warn about.
    pub fn validate(&self) -> Result<()> {
        if self.top == 0 {
            bail!("top must be a positive integer");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("test date")
    }

    fn options(top: usize) -> ReportOptions {
        ReportOptions {
            from: date("2025-01-01"),
            to: date("2025-01-07"),
            tz: Zone::Jst,
            top,
        }
    }

    #[test]
    fn test_validate_accepts_positive_top() {
        assert!(options(1).validate().is_ok());
        assert!(options(10).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_top() {
        let err = options(0).validate().unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_validate_accepts_inverted_window() {
        let opts = ReportOptions {
            from: date("2025-01-07"),
            to: date("2025-01-01"),
            tz: Zone::Ict,
            top: 3,
        };
        assert!(opts.validate().is_ok());
    }
}
