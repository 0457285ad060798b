//! Hue assignment for per-variant chart colors.

use serde::Serialize;

use crate::config::{ColorScheme, HUE_LIGHTNESS, HUE_SATURATION};
use crate::models::VariantKey;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// An HSL color with the dashboard's fixed saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: u8,
    pub lightness: u8,
}

impl HslColor {
    pub fn from_hue(hue: f64) -> Self {
        Self {
            hue,
            saturation: HUE_SATURATION,
            lightness: HUE_LIGHTNESS,
        }
    }

    /// CSS `hsl(...)` string.
    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }

    /// CSS `hsla(...)` string with the given alpha.
    pub fn css_alpha(&self, alpha: f64) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, alpha
        )
    }
}

/// Evenly spaced hue for position `index` out of `count` variants.
pub fn positional_hue(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (index as f64 * 360.0 / count as f64) % 360.0
}

/// Hue derived from the variant key alone (FNV-1a over its fields).
pub fn stable_hue(key: &VariantKey) -> f64 {
    let mut hash = FNV_OFFSET_BASIS;
    for field in [&key.color, &key.ram, &key.storage] {
        for byte in field.as_bytes().iter().chain(std::iter::once(&0u8)) {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    (hash % 360) as f64
}

/// One color per variant, in the order given.
pub fn assign_colors<'a, I>(variants: I, scheme: ColorScheme) -> Vec<HslColor>
where
    I: ExactSizeIterator<Item = &'a VariantKey>,
{
    let count = variants.len();
    variants
        .enumerate()
        .map(|(index, key)| {
            let hue = match scheme {
                ColorScheme::Positional => positional_hue(index, count),
                ColorScheme::Stable => stable_hue(key),
            };
            HslColor::from_hue(hue)
        })
        .collect()
}
