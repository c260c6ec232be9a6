//! Applying a selection to the dataset.

use crate::record::{Dataset, HospitalRecord};
use crate::selection::Selection;

/// Records passing every constrained axis of `selection`.
///
/// A single stable pass over the dataset: survivors keep their dataset
/// order, duplicates included, so downstream projections are deterministic.
/// An empty result is a normal outcome, not an error.
pub fn filter_records<'a>(dataset: &'a Dataset, selection: &Selection) -> Vec<&'a HospitalRecord> {
    dataset
        .iter()
        .filter(|record| selection.matches(record))
        .collect()
}
