//! Most-recent observations table.

use chrono::FixedOffset;
use serde::Serialize;

use crate::models::Observation;
use crate::timeline::{local_datetime, DateBucket};

/// One row of the recent-observations table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentRow {
    pub model: String,
    pub color: String,
    pub ram: String,
    pub storage: String,
    pub price: f64,
    pub date: String,
}

/// The `limit` newest observations, newest first.
///
/// Unparseable timestamps sort after every valid one. Ties keep input order.
pub fn recent_observations(
    observations: &[Observation],
    limit: usize,
    utc_offset: Option<FixedOffset>,
    date_format: &str,
) -> Vec<RecentRow> {
    let mut ordered: Vec<_> = observations
        .iter()
        .map(|obs| (local_datetime(&obs.timestamp, utc_offset), obs))
        .collect();
    // None < Some, so descending order puts invalid timestamps last.
    ordered.sort_by(|a, b| b.0.cmp(&a.0));

    ordered
        .into_iter()
        .take(limit)
        .map(|(instant, obs)| RecentRow {
            model: obs.display_model(),
            color: obs.color.clone(),
            ram: obs.ram.clone(),
            storage: obs.storage.clone(),
            price: obs.price,
            date: instant
                .map(|dt| DateBucket::Day(dt.date()))
                .unwrap_or(DateBucket::Invalid)
                .label(date_format),
        })
        .collect()
}
