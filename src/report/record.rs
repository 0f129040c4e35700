use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// An integer log field that may have failed to parse.
///
/// Rows with an unparseable `status` or `latency_ms` are kept (unlike rows
/// with an unparseable timestamp, which are dropped); the bad field is
/// carried as [`Numeric::Nan`] and contaminates every sum and average it
/// participates in. The asymmetry is deliberate and must not be collapsed
/// into either dropping the row or substituting zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeric {
    /// A successfully parsed base-10 integer.
    Value(i64),
    /// Parse failure sentinel; absorbing under addition.
    Nan,
}

impl Numeric {
    /// Parses a trimmed field as a base-10 integer, falling back to `Nan`.
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>().map_or(Self::Nan, Self::Value)
    }

    /// Whether this value is the contamination sentinel.
    pub const fn is_nan(self) -> bool {
        matches!(self, Self::Nan)
    }

    /// Adds two values; `Nan` absorbs.
    pub fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => Self::Value(a.saturating_add(b)),
            _ => Self::Nan,
        }
    }

    /// Divides a sum by a count, rounding the result to the nearest
    /// integer with halves toward positive infinity.
    ///
    /// Exact integer arithmetic: `round(sum / n) = floor((2*sum + n) / 2n)`
    /// for `n > 0`, widened through i128 so the doubling cannot overflow.
    pub fn div_round(self, count: u64) -> Self {
        if count == 0 {
            return Self::Nan;
        }
        match self {
            Self::Nan => Self::Nan,
            Self::Value(sum) => {
                let n = count as i128;
                let doubled = 2 * i128::from(sum) + n;
                Self::Value(doubled.div_euclid(2 * n) as i64)
            }
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Nan => write!(f, "NaN"),
        }
    }
}

impl Serialize for Numeric {
    /// `Value` serializes as a number, `Nan` as `null` (the JSON rendering
    /// of a contaminated average).
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_i64(*v),
            Self::Nan => serializer.serialize_none(),
        }
    }
}

/// One validated access-log row.
///
/// Produced by the parser from a well-formed line and immutable thereafter.
/// `status` is carried for completeness but no aggregation consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Request instant, always parseable (rows without one are dropped).
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub path: String,
    pub status: Numeric,
    pub latency_ms: Numeric,
}
