use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// VariantKey — Composite (color, ram, storage) signature
// ---------------------------------------------------------------------------

/// Structural identity of a product variant.
///
/// Ordering is lexicographic over `(color, ram, storage)`, which fixes the
/// iteration order of every per-variant output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariantKey {
    pub color: String,
    pub ram: String,
    pub storage: String,
}

impl VariantKey {
    pub fn new(color: &str, ram: &str, storage: &str) -> Self {
        Self {
            color: color.to_string(),
            ram: ram.to_string(),
            storage: storage.to_string(),
        }
    }

    /// Human-readable label, e.g. `"Midnight - 8GB/256GB"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}/{}", self.color, self.ram, self.storage)
    }
}
