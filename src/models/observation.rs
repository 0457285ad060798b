use serde::{Deserialize, Serialize};

use super::variant::VariantKey;

// ---------------------------------------------------------------------------
// Observation — One recorded price sample for a variant
// ---------------------------------------------------------------------------

/// A single raw price observation as delivered by the data source.
///
/// `timestamp` is kept as the raw ISO-8601 text; it is only interpreted when
/// the observation is bucketed by day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub model: String,
    pub color: String,
    pub ram: String,
    pub storage: String,
    pub price: f64,
    pub timestamp: String,
}

impl Observation {
    pub fn new(
        model: &str,
        color: &str,
        ram: &str,
        storage: &str,
        price: f64,
        timestamp: &str,
    ) -> Self {
        Self {
            model: model.to_string(),
            color: color.to_string(),
            ram: ram.to_string(),
            storage: storage.to_string(),
            price,
            timestamp: timestamp.to_string(),
        }
    }

    /// The `(color, ram, storage)` signature this observation belongs to.
    ///
    /// Model is excluded: it is fixed per batch by the active filter.
    pub fn variant_key(&self) -> VariantKey {
        VariantKey::new(&self.color, &self.ram, &self.storage)
    }

    /// Model identifier with underscores shown as spaces.
    pub fn display_model(&self) -> String {
        display_model_name(&self.model)
    }
}

/// Render a model identifier such as `SAMSUNG_GALAXY_S24` for display.
pub fn display_model_name(model: &str) -> String {
    model.replace('_', " ")
}
