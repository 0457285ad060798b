use serde::{Deserialize, Serialize};

use super::observation::Observation;
use super::stats::FilterOptions;

// ---------------------------------------------------------------------------
// FilterState — Immutable dashboard filter selection
// ---------------------------------------------------------------------------

/// The active filter selection, passed explicitly into every call.
///
/// `with_*` methods return a new value; an empty string clears the field,
/// matching an "All ..." dropdown choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FilterState {
    pub model: Option<String>,
    pub color: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(self, model: &str) -> Self {
        Self {
            model: non_empty(model),
            ..self
        }
    }

    pub fn with_color(self, color: &str) -> Self {
        Self {
            color: non_empty(color),
            ..self
        }
    }

    pub fn with_ram(self, ram: &str) -> Self {
        Self {
            ram: non_empty(ram),
            ..self
        }
    }

    pub fn with_storage(self, storage: &str) -> Self {
        Self {
            storage: non_empty(storage),
            ..self
        }
    }

    /// Clear every selection.
    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// Charts are only shown once a model has been chosen.
    pub fn is_model_selected(&self) -> bool {
        self.model.is_some()
    }

    /// Whether an observation passes every field that is set.
    pub fn matches(&self, obs: &Observation) -> bool {
        field_matches(&self.model, &obs.model)
            && field_matches(&self.color, &obs.color)
            && field_matches(&self.ram, &obs.ram)
            && field_matches(&self.storage, &obs.storage)
    }

    /// Query parameters for the data request, in `model, color, ram, storage`
    /// order, omitting unset fields.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("model", &self.model),
            ("color", &self.color),
            ("ram", &self.ram),
            ("storage", &self.storage),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name, v.clone())))
        .collect()
    }

    /// Drop selections that are no longer offered after the option lists
    /// were refreshed for a new model.
    pub fn retain_available(&self, options: &FilterOptions) -> Self {
        Self {
            model: self.model.clone(),
            color: self.color.clone().filter(|c| options.contains_color(c)),
            ram: self.ram.clone().filter(|r| options.contains_ram(r)),
            storage: self.storage.clone().filter(|s| options.contains_storage(s)),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn field_matches(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().map_or(true, |f| f == value)
}
