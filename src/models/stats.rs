use serde::{Deserialize, Serialize};

use super::observation::display_model_name;

// ---------------------------------------------------------------------------
// PriceStats — Precomputed summary statistics (consumed as-is)
// ---------------------------------------------------------------------------

/// Summary statistics computed by the data service for the active filter.
///
/// An empty selection is reported as all zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct PriceStats {
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    pub current_price: f64,
    #[serde(default)]
    pub total_records: u64,
}

impl PriceStats {
    /// Average price rounded to the nearest whole unit, as shown on the stats card.
    pub fn rounded_avg_price(&self) -> f64 {
        self.avg_price.round()
    }
}

// ---------------------------------------------------------------------------
// FilterOptions — Available dropdown values for a model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterOptions {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub ram: Vec<String>,
    #[serde(default)]
    pub storage: Vec<String>,
}

impl FilterOptions {
    pub fn contains_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    pub fn contains_ram(&self, ram: &str) -> bool {
        self.ram.iter().any(|r| r == ram)
    }

    pub fn contains_storage(&self, storage: &str) -> bool {
        self.storage.iter().any(|s| s == storage)
    }
}

// ---------------------------------------------------------------------------
// ModelList
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<String>,
}

impl ModelList {
    /// `(value, display text)` pairs for a model dropdown.
    pub fn options(&self) -> Vec<(String, String)> {
        self.models
            .iter()
            .map(|m| (m.clone(), display_model_name(m)))
            .collect()
    }
}
