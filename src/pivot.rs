//! Series pivot engine.
//!
//! Turns a flat batch of observations into one shared, chronologically
//! sorted date axis, one gap-preserving trend series per variant aligned to
//! that axis, and one mean price per variant for the distribution view.

use std::collections::BTreeMap;

use chrono::FixedOffset;
use tracing::debug;

use crate::grouper::group;
use crate::models::{Observation, VariantKey};
use crate::timeline::{build_date_axis, DateBucket};

// ---------------------------------------------------------------------------
// AggregatedCell
// ---------------------------------------------------------------------------

/// Running sum and count of the prices in one `(variant, day)` cell.
///
/// Cells are only created by [`AggregatedCell::first`], so `count >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedCell {
    sum: f64,
    count: u32,
}

impl AggregatedCell {
    pub fn first(price: f64) -> Self {
        Self { sum: price, count: 1 }
    }

    pub fn add(&mut self, price: f64) {
        self.sum += price;
        self.count += 1;
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.sum / f64::from(self.count)
    }
}

// ---------------------------------------------------------------------------
// PivotResult
// ---------------------------------------------------------------------------

/// Output of [`pivot`].
///
/// Every `trend` series has exactly `axis.len()` entries, with `None` where
/// the variant had no observation that day. `trend` and `distribution` have
/// the same key set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PivotResult {
    pub axis: Vec<DateBucket>,
    pub trend: BTreeMap<VariantKey, Vec<Option<f64>>>,
    pub distribution: BTreeMap<VariantKey, f64>,
}

impl PivotResult {
    pub fn is_empty(&self) -> bool {
        self.axis.is_empty() && self.trend.is_empty() && self.distribution.is_empty()
    }

    pub fn variant_count(&self) -> usize {
        self.trend.len()
    }

    /// Variants in output order.
    pub fn variants(&self) -> impl ExactSizeIterator<Item = &VariantKey> {
        self.trend.keys()
    }

    pub fn axis_labels(&self, format: &str) -> Vec<String> {
        self.axis.iter().map(|b| b.label(format)).collect()
    }

    pub fn variant_labels(&self) -> Vec<String> {
        self.variants().map(VariantKey::label).collect()
    }
}

// ---------------------------------------------------------------------------
// pivot
// ---------------------------------------------------------------------------

/// Pivot a batch into a date-aligned trend matrix and per-variant means.
///
/// Same-day prices for a variant are averaged into one cell. The distribution
/// value is the plain mean of every raw price for the variant, not a mean of
/// daily means. Prices are summed in sorted order so any permutation of the
/// same batch yields bit-identical output.
pub fn pivot(observations: &[Observation], utc_offset: Option<FixedOffset>) -> PivotResult {
    let groups = group(observations);

    let mut cells: BTreeMap<&VariantKey, BTreeMap<DateBucket, AggregatedCell>> = BTreeMap::new();
    let mut distribution: BTreeMap<VariantKey, f64> = BTreeMap::new();

    for (key, members) in &groups {
        let mut samples: Vec<(DateBucket, f64)> = members
            .iter()
            .map(|obs| (DateBucket::from_timestamp(&obs.timestamp, utc_offset), obs.price))
            .collect();
        samples.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

        let mut by_day: BTreeMap<DateBucket, AggregatedCell> = BTreeMap::new();
        for (bucket, price) in &samples {
            by_day
                .entry(*bucket)
                .and_modify(|cell| cell.add(*price))
                .or_insert_with(|| AggregatedCell::first(*price));
        }
        cells.insert(key, by_day);

        let mut prices: Vec<f64> = members.iter().map(|obs| obs.price).collect();
        prices.sort_by(f64::total_cmp);
        distribution.insert(key.clone(), mean(&prices));
    }

    let axis = build_date_axis(cells.values().flat_map(|by_day| by_day.keys().copied()));

    let trend: BTreeMap<VariantKey, Vec<Option<f64>>> = cells
        .into_iter()
        .map(|(key, by_day)| {
            let series = axis
                .iter()
                .map(|bucket| by_day.get(bucket).map(AggregatedCell::mean))
                .collect();
            (key.clone(), series)
        })
        .collect();

    debug!(
        observations = observations.len(),
        variants = trend.len(),
        dates = axis.len(),
        "pivoted price observations"
    );

    PivotResult {
        axis,
        trend,
        distribution,
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
