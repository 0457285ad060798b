//! Calendar-day bucketing of raw timestamps and the shared date axis.

use std::collections::BTreeSet;
use std::fmt::Write;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};
use crate::config::INVALID_DATE_LABEL;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

// ---------------------------------------------------------------------------
// DateBucket
// ---------------------------------------------------------------------------

/// Local calendar day an observation falls on.
///
/// Unparseable timestamps share the single `Invalid` bucket, which orders
/// after every real day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateBucket {
    Day(NaiveDate),
    Invalid,
}

impl DateBucket {
    /// Bucket a raw timestamp.
    ///
    /// `utc_offset` only applies to timestamps that carry their own offset;
    /// `None` means the host's local timezone.
    pub fn from_timestamp(timestamp: &str, utc_offset: Option<FixedOffset>) -> Self {
        match local_datetime(timestamp, utc_offset) {
            Some(dt) => DateBucket::Day(dt.date()),
            None => DateBucket::Invalid,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DateBucket::Day(d) => Some(*d),
            DateBucket::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, DateBucket::Day(_))
    }

    /// Display label using a chrono strftime pattern.
    pub fn label(&self, format: &str) -> String {
        match self {
            DateBucket::Day(d) => {
                let mut out = String::new();
                if write!(out, "{}", d.format(format)).is_err() {
                    return INVALID_DATE_LABEL.to_string();
                }
                out
            }
            DateBucket::Invalid => INVALID_DATE_LABEL.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Interpret an ISO-8601 timestamp as local wall-clock time.
///
/// Offset-aware input (RFC 3339) is converted to `utc_offset`, or to the
/// host timezone when unset. Naive datetimes and bare dates are taken as
/// already local.
pub fn local_datetime(timestamp: &str, utc_offset: Option<FixedOffset>) -> Option<NaiveDateTime> {
    let ts = timestamp.trim();
    if ts.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(match utc_offset {
            Some(offset) => dt.with_timezone(&offset).naive_local(),
            None => dt.with_timezone(&Local).naive_local(),
        });
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// Deduplicate buckets and sort them chronologically.
pub fn build_date_axis<I>(buckets: I) -> Vec<DateBucket>
where
    I: IntoIterator<Item = DateBucket>,
{
    let unique: BTreeSet<DateBucket> = buckets.into_iter().collect();
    unique.into_iter().collect()
}
