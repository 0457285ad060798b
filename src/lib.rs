//! Price tracker core.
//!
//! Aggregates a batch of raw product price observations into the shapes a
//! price dashboard draws: a date-aligned multi-variant trend matrix, a mean
//! price per variant, and a recent-observations table. Fetching, rendering
//! and summary statistics live outside this crate.
//!
//! # Quick start
//!
//! ```no_run
//! use price_tracker_core::{FilterState, PriceTracker};
//!
//! let tracker = PriceTracker::builder().build().unwrap();
//! let batch = tracker.parse_observations(r#"[
//!     {"model": "PIXEL_8", "color": "Black", "ram": "8GB", "storage": "128GB",
//!      "price": 999.0, "timestamp": "2024-01-01T10:00:00"}
//! ]"#).unwrap();
//!
//! let filter = FilterState::new().with_model("PIXEL_8");
//! let view = tracker.view(&filter, &batch);
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod grouper;
pub mod ingest;
pub mod models;
pub mod palette;
pub mod pivot;
pub mod recent;
pub mod sequencer;
pub mod timeline;

pub use chart::{DistributionChart, TrendChart, TrendDataset};
pub use config::{ColorScheme, ValidationMode};
pub use error::{PriceTrackerError, Result};
pub use grouper::{group, VariantGroups};
pub use models::{FilterOptions, FilterState, ModelList, Observation, PriceStats, VariantKey};
pub use palette::HslColor;
pub use pivot::{pivot, AggregatedCell, PivotResult};
pub use recent::RecentRow;
pub use sequencer::{RequestSequencer, RequestToken};
pub use timeline::DateBucket;

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, NaiveDate};
use serde::Serialize;

// ---------------------------------------------------------------------------
// PriceTrackerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PriceTracker`].
///
/// Use [`PriceTracker::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PriceTrackerBuilder::build).
pub struct PriceTrackerBuilder {
    utc_offset: Option<FixedOffset>,
    date_format: String,
    color_scheme: ColorScheme,
    validation: ValidationMode,
    recent_limit: usize,
}

impl Default for PriceTrackerBuilder {
    fn default() -> Self {
        Self {
            utc_offset: None,
            date_format: config::DEFAULT_DATE_FORMAT.to_string(),
            color_scheme: ColorScheme::default(),
            validation: ValidationMode::default(),
            recent_limit: config::DEFAULT_RECENT_LIMIT,
        }
    }
}

impl PriceTrackerBuilder {
    /// Fix the calendar-day boundary for timestamps that carry an offset.
    ///
    /// If not set, the host's local timezone is used. Naive timestamps are
    /// always bucketed by their own wall-clock date.
    pub fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Set the chrono strftime pattern used for date labels.
    ///
    /// Defaults to `%Y-%m-%d`. Ordering never depends on the label.
    pub fn date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Choose how variants are colored. Defaults to [`ColorScheme::Positional`].
    pub fn color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    /// Choose how malformed records are handled at ingestion.
    ///
    /// Defaults to [`ValidationMode::Permissive`].
    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Number of rows in the recent-observations table. Defaults to 20.
    pub fn recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Build the tracker, rejecting an unusable date format.
    pub fn build(self) -> Result<PriceTracker> {
        if !date_format_is_usable(&self.date_format) {
            return Err(PriceTrackerError::InvalidInput(format!(
                "invalid date format `{}`",
                self.date_format
            )));
        }
        Ok(PriceTracker {
            utc_offset: self.utc_offset,
            date_format: self.date_format,
            color_scheme: self.color_scheme,
            validation: self.validation,
            recent_limit: self.recent_limit,
        })
    }
}

/// A label format must parse and must only use fields a calendar day has
/// (no time of day or zone).
fn date_format_is_usable(format: &str) -> bool {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2000, 1, 1) else {
        return false;
    };
    let mut out = String::new();
    write!(out, "{}", sample.format(format)).is_ok()
}

// ---------------------------------------------------------------------------
// DashboardView
// ---------------------------------------------------------------------------

/// Everything the dashboard draws for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardView {
    /// No model selected yet.
    Empty,
    Data {
        trend: TrendChart,
        distribution: DistributionChart,
        recent: Vec<RecentRow>,
    },
}

// ---------------------------------------------------------------------------
// PriceTracker
// ---------------------------------------------------------------------------

/// Entry point tying ingestion, pivoting, coloring and table building to one
/// configuration.
///
/// Holds no per-batch state: every call recomputes from the batch it is given.
#[derive(Debug, Clone)]
pub struct PriceTracker {
    utc_offset: Option<FixedOffset>,
    date_format: String,
    color_scheme: ColorScheme,
    validation: ValidationMode,
    recent_limit: usize,
}

impl PriceTracker {
    /// Create a new builder for configuring the tracker.
    pub fn builder() -> PriceTrackerBuilder {
        PriceTrackerBuilder::default()
    }

    /// Decode a JSON array of observations under the configured validation mode.
    pub fn parse_observations(&self, json: &str) -> Result<Vec<Observation>> {
        ingest::parse_observations(json, self.validation)
    }

    pub fn pivot(&self, observations: &[Observation]) -> PivotResult {
        pivot::pivot(observations, self.utc_offset)
    }

    /// One color per variant of `result`, shared by both charts.
    pub fn colors(&self, result: &PivotResult) -> Vec<HslColor> {
        palette::assign_colors(result.variants(), self.color_scheme)
    }

    pub fn trend_chart(&self, result: &PivotResult) -> TrendChart {
        chart::trend_chart(result, &self.colors(result), &self.date_format)
    }

    pub fn distribution_chart(&self, result: &PivotResult) -> DistributionChart {
        chart::distribution_chart(result, &self.colors(result))
    }

    pub fn recent(&self, observations: &[Observation]) -> Vec<RecentRow> {
        recent::recent_observations(
            observations,
            self.recent_limit,
            self.utc_offset,
            &self.date_format,
        )
    }

    /// Build the full dashboard view for a filter selection.
    ///
    /// Observations that do not match `filter` are left out.
    pub fn view(&self, filter: &FilterState, observations: &[Observation]) -> DashboardView {
        if !filter.is_model_selected() {
            return DashboardView::Empty;
        }

        let selected: Vec<Observation> = observations
            .iter()
            .filter(|obs| filter.matches(obs))
            .cloned()
            .collect();

        let result = self.pivot(&selected);
        let colors = self.colors(&result);

        DashboardView::Data {
            trend: chart::trend_chart(&result, &colors, &self.date_format),
            distribution: chart::distribution_chart(&result, &colors),
            recent: self.recent(&selected),
        }
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PriceTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PriceTracker(utc_offset={}, date_format={}, color_scheme={:?}, validation={:?}, recent_limit={})",
            self.utc_offset
                .map(|o| o.to_string())
                .unwrap_or_else(|| "local".to_string()),
            self.date_format,
            self.color_scheme,
            self.validation,
            self.recent_limit
        )
    }
}
