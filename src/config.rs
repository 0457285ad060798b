//! Defaults and option enums shared across the crate.

pub const DEFAULT_RECENT_LIMIT: usize = 20;
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

pub const HUE_SATURATION: u8 = 70;
pub const HUE_LIGHTNESS: u8 = 60;
/// Alpha for the translucent fill under a trend line.
pub const LINE_FILL_ALPHA: f64 = 0.1;
pub const BAR_ALPHA: f64 = 0.8;

/// How each variant is assigned a hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Evenly spaced by position in the current variant set.
    ///
    /// A variant's color shifts whenever the variant set changes.
    #[default]
    Positional,
    /// Derived from a hash of the variant key, so a variant keeps its color
    /// across calls.
    Stable,
}

/// What the ingestion boundary does with malformed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Degrade malformed fields (empty keys, `NaN` prices, invalid dates)
    /// and keep going.
    #[default]
    Permissive,
    /// Reject the batch at the first malformed record.
    Strict,
}
