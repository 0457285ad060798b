//! Render-ready chart payloads built from a [`PivotResult`].
//!
//! Field names follow the chart renderer's camelCase conventions; trend gaps
//! serialize as `null` and the renderer is told to span them.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::{BAR_ALPHA, LINE_FILL_ALPHA};
use crate::palette::HslColor;
use crate::pivot::PivotResult;

// ---------------------------------------------------------------------------
// Trend (multi-line time chart)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    pub background_color: String,
    pub span_gaps: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TrendChart {
    pub labels: Vec<String>,
    pub datasets: Vec<TrendDataset>,
}

/// Build the trend chart. `colors` is indexed in variant order.
pub fn trend_chart(result: &PivotResult, colors: &[HslColor], date_format: &str) -> TrendChart {
    let datasets = result
        .trend
        .values()
        .zip(variant_display_labels(result))
        .zip(colors)
        .map(|((series, label), color)| TrendDataset {
            label,
            data: series.clone(),
            border_color: color.css(),
            background_color: color.css_alpha(LINE_FILL_ALPHA),
            span_gaps: true,
        })
        .collect();

    TrendChart {
        labels: result.axis_labels(date_format),
        datasets,
    }
}

// ---------------------------------------------------------------------------
// Distribution (bar chart of mean price per variant)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DistributionChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub background_colors: Vec<String>,
    pub border_colors: Vec<String>,
}

pub fn distribution_chart(result: &PivotResult, colors: &[HslColor]) -> DistributionChart {
    let mut chart = DistributionChart::default();
    let labels = variant_display_labels(result);
    for ((value, label), color) in result.distribution.values().zip(labels).zip(colors) {
        chart.labels.push(label);
        chart.values.push(*value);
        chart.background_colors.push(color.css_alpha(BAR_ALPHA));
        chart.border_colors.push(color.css_alpha(1.0));
    }
    chart
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// One label per variant, in variant order.
///
/// Distinct keys can format to the same text (`"8GB/1" + "2"` vs
/// `"8GB" + "1/2"`); such labels get a ` (#n)` suffix so every dataset name
/// stays unique.
pub fn variant_display_labels(result: &PivotResult) -> Vec<String> {
    let labels = result.variant_labels();
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for label in &labels {
        *totals.entry(label.as_str()).or_default() += 1;
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    labels
        .iter()
        .map(|label| {
            if totals[label.as_str()] == 1 {
                return label.clone();
            }
            let n = seen.entry(label.as_str()).or_default();
            *n += 1;
            format!("{} (#{})", label, n)
        })
        .collect()
}
