//! Dataset rows and the dataset collection.

use serde::{Deserialize, Serialize};

/// One hospital/condition/score observation row.
///
/// Records are immutable once loaded. Columns beyond these five are dropped
/// by the loader and never reach the core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    /// Top-level geographic grouping (source column: `State`).
    pub region: String,
    /// Finer geographic code nested under a region (source column: `ZIP Code`).
    pub subregion: String,
    /// Medical condition category used as a filter axis.
    pub condition: String,
    /// Display name of the facility (source column: `Hospital Name`).
    pub facility_name: String,
    /// Quality score for this condition at this facility.
    pub score: f64,
}

/// A fixed, ordered sequence of records for the lifetime of the process.
///
/// The dataset is loaded once at startup and never mutated afterwards; every
/// view the dashboard shows is recomputed from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<HospitalRecord>,
}

impl Dataset {
    /// Wrap already-loaded records, preserving their order.
    pub fn new(records: Vec<HospitalRecord>) -> Self {
        Self { records }
    }

    /// All records in load order.
    pub fn records(&self) -> &[HospitalRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, HospitalRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a HospitalRecord;
    type IntoIter = std::slice::Iter<'a, HospitalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
