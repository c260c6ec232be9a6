//! Selector options derived from the dataset.
//!
//! The catalog answers two questions for the presentation shell: what values
//! each selector may offer, and which sub-regions are valid under the
//! currently chosen region.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::record::Dataset;

/// Distinct selector options derived from a [`Dataset`].
///
/// Built once at startup; the dataset never changes, so the catalog is never
/// rebuilt. Values are compared by exact string equality with no case or
/// whitespace normalization, so options always match the raw dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionCatalog {
    /// Distinct regions, sorted.
    pub regions: Vec<String>,
    /// Distinct conditions, sorted.
    pub conditions: Vec<String>,
    /// Distinct sub-regions grouped by the region they occur under.
    pub subregions_by_region: BTreeMap<String, BTreeSet<String>>,
}

impl OptionCatalog {
    /// Derive the catalog from a dataset.
    ///
    /// Deterministic and total. An empty dataset yields empty option lists
    /// and the selectors simply offer nothing to choose — not an error.
    pub fn build(dataset: &Dataset) -> Self {
        let mut regions = BTreeSet::new();
        let mut conditions = BTreeSet::new();
        let mut subregions_by_region: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for record in dataset {
            regions.insert(record.region.clone());
            conditions.insert(record.condition.clone());
            subregions_by_region
                .entry(record.region.clone())
                .or_default()
                .insert(record.subregion.clone());
        }

        Self {
            regions: regions.into_iter().collect(),
            conditions: conditions.into_iter().collect(),
            subregions_by_region,
        }
    }

    /// Sub-region options valid under `region`.
    ///
    /// No region selected means no sub-region options: sub-region choice is
    /// always scoped to a region. A region the catalog does not know (a
    /// stale value mid-update) also yields the empty set rather than an
    /// error. Pruning an existing sub-region selection against this set is
    /// the caller's job — see [`Selection::set_region`].
    ///
    /// [`Selection::set_region`]: crate::selection::Selection::set_region
    pub fn subregion_options(&self, region: Option<&str>) -> BTreeSet<String> {
        region
            .and_then(|r| self.subregions_by_region.get(r))
            .cloned()
            .unwrap_or_default()
    }

    /// Whether `region` occurs in the dataset.
    pub fn contains_region(&self, region: &str) -> bool {
        self.subregions_by_region.contains_key(region)
    }

    /// Whether `condition` occurs in the dataset.
    pub fn contains_condition(&self, condition: &str) -> bool {
        self.conditions.iter().any(|c| c == condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::HospitalRecord;

    fn rec(region: &str, subregion: &str, condition: &str) -> HospitalRecord {
        HospitalRecord {
            region: region.to_string(),
            subregion: subregion.to_string(),
            condition: condition.to_string(),
            facility_name: "General".to_string(),
            score: 1.0,
        }
    }

    #[test]
    fn test_build_collects_distinct_sorted_values() {
        let dataset = Dataset::new(vec![
            rec("NY", "10001", "Heart"),
            rec("CA", "90001", "Stroke"),
            rec("CA", "90001", "Heart"),
            rec("CA", "90002", "Heart"),
        ]);
        let catalog = OptionCatalog::build(&dataset);

        assert_eq!(catalog.regions, vec!["CA", "NY"]);
        assert_eq!(catalog.conditions, vec!["Heart", "Stroke"]);
    }

    #[test]
    fn test_subregions_grouped_per_region() {
        let dataset = Dataset::new(vec![
            rec("CA", "90001", "Heart"),
            rec("CA", "90002", "Heart"),
            rec("NY", "10001", "Heart"),
        ]);
        let catalog = OptionCatalog::build(&dataset);

        let ca: Vec<&String> = catalog.subregions_by_region["CA"].iter().collect();
        assert_eq!(ca, ["90001", "90002"]);
        let ny: Vec<&String> = catalog.subregions_by_region["NY"].iter().collect();
        assert_eq!(ny, ["10001"]);
    }

    #[test]
    fn test_empty_dataset_builds_empty_catalog() {
        let catalog = OptionCatalog::build(&Dataset::default());
        assert!(catalog.regions.is_empty());
        assert!(catalog.conditions.is_empty());
        assert!(catalog.subregions_by_region.is_empty());
    }

    #[test]
    fn test_subregion_options_requires_a_region() {
        let dataset = Dataset::new(vec![rec("CA", "90001", "Heart")]);
        let catalog = OptionCatalog::build(&dataset);

        assert!(catalog.subregion_options(None).is_empty());
    }

    #[test]
    fn test_subregion_options_for_unknown_region_is_empty() {
        let dataset = Dataset::new(vec![rec("CA", "90001", "Heart")]);
        let catalog = OptionCatalog::build(&dataset);

        assert!(catalog.subregion_options(Some("TX")).is_empty());
    }

    #[test]
    fn test_subregion_options_for_known_region() {
        let dataset = Dataset::new(vec![
            rec("CA", "90001", "Heart"),
            rec("CA", "90002", "Heart"),
        ]);
        let catalog = OptionCatalog::build(&dataset);

        let options = catalog.subregion_options(Some("CA"));
        assert_eq!(options.len(), 2);
        assert!(options.contains("90001"));
        assert!(options.contains("90002"));
    }

    #[test]
    fn test_membership_helpers() {
        let dataset = Dataset::new(vec![rec("CA", "90001", "Heart")]);
        let catalog = OptionCatalog::build(&dataset);

        assert!(catalog.contains_region("CA"));
        assert!(!catalog.contains_region("NY"));
        assert!(catalog.contains_condition("Heart"));
        assert!(!catalog.contains_condition("Stroke"));
    }
}
