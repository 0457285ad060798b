//! Variant grouper: classify observations by `(color, ram, storage)`.

use std::collections::BTreeMap;

use crate::models::{Observation, VariantKey};

/// Observations bucketed by variant, borrowed from the input batch.
///
/// Keys iterate in [`VariantKey`] order; each bucket keeps the order in which
/// its observations were received.
pub type VariantGroups<'a> = BTreeMap<VariantKey, Vec<&'a Observation>>;

/// Group a batch by variant key.
///
/// No validation happens here: a blank or garbage field simply becomes part
/// of its own key.
pub fn group(observations: &[Observation]) -> VariantGroups<'_> {
    let mut groups: VariantGroups<'_> = BTreeMap::new();
    for obs in observations {
        groups.entry(obs.variant_key()).or_default().push(obs);
    }
    groups
}
