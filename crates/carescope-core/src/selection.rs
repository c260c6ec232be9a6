//! Filter selection state and its transition rules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::OptionCatalog;
use crate::record::HospitalRecord;

/// The user's current filter choices.
///
/// All three axes are optional. `None` (or an empty sub-region set) means
/// the axis is unconstrained and every record passes it. The struct starts
/// fully unconstrained, so the first render shows the whole dataset.
///
/// Mutations go through the setters below rather than the fields directly:
/// the setters keep the invariant that every selected sub-region is valid
/// under the selected region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub region: Option<String>,
    pub subregions: BTreeSet<String>,
    pub condition: Option<String>,
}

impl Selection {
    /// Change the region axis.
    ///
    /// Always clears the sub-region set, even when the new region equals the
    /// old one. Sub-regions are scoped to a region, so a region change (or
    /// re-pick) invalidates them; clearing rather than carrying them over
    /// keeps stale sub-regions from silently constraining the next filter
    /// pass.
    pub fn set_region(&mut self, region: Option<String>) {
        self.region = region;
        self.subregions.clear();
    }

    /// Replace the sub-region set.
    ///
    /// Values not offered under the current region are silently dropped: the
    /// kept set is the intersection of the request with
    /// [`OptionCatalog::subregion_options`]. With no region selected nothing
    /// is valid and the set ends up empty.
    pub fn set_subregions<I>(&mut self, catalog: &OptionCatalog, subregions: I)
    where
        I: IntoIterator<Item = String>,
    {
        let valid = catalog.subregion_options(self.region.as_deref());
        self.subregions = subregions
            .into_iter()
            .filter(|s| valid.contains(s))
            .collect();
    }

    /// Add or remove a single sub-region, for checkbox-style toggling.
    ///
    /// Adding a value the current region does not offer is a no-op; removal
    /// always succeeds.
    pub fn toggle_subregion(&mut self, catalog: &OptionCatalog, subregion: &str) {
        if self.subregions.contains(subregion) {
            self.subregions.remove(subregion);
        } else if catalog
            .subregion_options(self.region.as_deref())
            .contains(subregion)
        {
            self.subregions.insert(subregion.to_string());
        }
    }

    /// Change the condition axis. Independent of the other two axes.
    pub fn set_condition(&mut self, condition: Option<String>) {
        self.condition = condition;
    }

    /// Drop all constraints, returning to the initial show-everything state.
    pub fn reset(&mut self) {
        self.region = None;
        self.subregions.clear();
        self.condition = None;
    }

    /// Whether any axis is constrained.
    pub fn is_active(&self) -> bool {
        self.region.is_some() || !self.subregions.is_empty() || self.condition.is_some()
    }

    /// Whether `record` passes every constrained axis.
    ///
    /// The axes combine with AND; an unconstrained axis passes everything.
    pub fn matches(&self, record: &HospitalRecord) -> bool {
        let region_ok = self
            .region
            .as_ref()
            .map(|r| *r == record.region)
            .unwrap_or(true);
        let subregion_ok = self.subregions.is_empty() || self.subregions.contains(&record.subregion);
        let condition_ok = self
            .condition
            .as_ref()
            .map(|c| *c == record.condition)
            .unwrap_or(true);
        region_ok && subregion_ok && condition_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Dataset;

    fn rec(region: &str, subregion: &str, condition: &str) -> HospitalRecord {
        HospitalRecord {
            region: region.to_string(),
            subregion: subregion.to_string(),
            condition: condition.to_string(),
            facility_name: "General".to_string(),
            score: 1.0,
        }
    }

    fn catalog() -> OptionCatalog {
        OptionCatalog::build(&Dataset::new(vec![
            rec("CA", "90001", "Heart"),
            rec("CA", "90002", "Stroke"),
            rec("NY", "10001", "Heart"),
        ]))
    }

    #[test]
    fn test_default_is_unconstrained() {
        let selection = Selection::default();
        assert!(!selection.is_active());
        assert!(selection.matches(&rec("CA", "90001", "Heart")));
        assert!(selection.matches(&rec("NY", "10001", "Stroke")));
    }

    #[test]
    fn test_set_region_clears_subregions() {
        let catalog = catalog();
        let mut selection = Selection::default();
        selection.set_region(Some("CA".to_string()));
        selection.set_subregions(&catalog, vec!["90001".to_string()]);
        assert!(!selection.subregions.is_empty());

        selection.set_region(Some("NY".to_string()));
        assert_eq!(selection.region.as_deref(), Some("NY"));
        assert!(selection.subregions.is_empty());
    }

    #[test]
    fn test_repicking_same_region_still_clears_subregions() {
        let catalog = catalog();
        let mut selection = Selection::default();
        selection.set_region(Some("CA".to_string()));
        selection.set_subregions(&catalog, vec!["90001".to_string()]);

        selection.set_region(Some("CA".to_string()));
        assert!(selection.subregions.is_empty());
    }

    #[test]
    fn test_set_region_twice_equals_once() {
        let mut once = Selection::default();
        once.set_region(Some("CA".to_string()));

        let mut twice = Selection::default();
        twice.set_region(Some("CA".to_string()));
        twice.set_region(Some("CA".to_string()));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_clearing_region_clears_subregions() {
        let catalog = catalog();
        let mut selection = Selection::default();
        selection.set_region(Some("CA".to_string()));
        selection.set_subregions(&catalog, vec!["90002".to_string()]);

        selection.set_region(None);
        assert!(selection.region.is_none());
        assert!(selection.subregions.is_empty());
    }

    #[test]
    fn test_set_subregions_drops_values_outside_region() {
        let catalog = catalog();
        let mut selection = Selection::default();
        selection.set_region(Some("CA".to_string()));
        selection.set_subregions(
            &catalog,
            vec![
                "90001".to_string(),
                "10001".to_string(), // belongs to NY
                "99999".to_string(), // unknown
            ],
        );

        let kept: Vec<&String> = selection.subregions.iter().collect();
        assert_eq!(kept, ["90001"]);
    }

    #[test]
    fn test_set_subregions_without_region_keeps_nothing() {
        let catalog = catalog();
        let mut selection = Selection::default();
        selection.set_subregions(&catalog, vec!["90001".to_string()]);
        assert!(selection.subregions.is_empty());
    }

    #[test]
    fn test_toggle_subregion_adds_and_removes() {
        let catalog = catalog();
        let mut selection = Selection::default();
        selection.set_region(Some("CA".to_string()));

        selection.toggle_subregion(&catalog, "90001");
        assert!(selection.subregions.contains("90001"));

        selection.toggle_subregion(&catalog, "90001");
        assert!(!selection.subregions.contains("90001"));
    }

    #[test]
    fn test_toggle_ignores_invalid_subregion() {
        let catalog = catalog();
        let mut selection = Selection::default();
        selection.set_region(Some("CA".to_string()));

        selection.toggle_subregion(&catalog, "10001");
        assert!(selection.subregions.is_empty());
    }

    #[test]
    fn test_condition_is_independent_of_region() {
        let mut selection = Selection::default();
        selection.set_condition(Some("Heart".to_string()));
        selection.set_region(Some("CA".to_string()));
        assert_eq!(selection.condition.as_deref(), Some("Heart"));

        selection.set_condition(None);
        assert_eq!(selection.region.as_deref(), Some("CA"));
        assert!(selection.condition.is_none());
    }

    #[test]
    fn test_reset_returns_to_default() {
        let catalog = catalog();
        let mut selection = Selection::default();
        selection.set_region(Some("CA".to_string()));
        selection.set_subregions(&catalog, vec!["90001".to_string()]);
        selection.set_condition(Some("Heart".to_string()));

        selection.reset();
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn test_matches_is_conjunction_of_axes() {
        let mut selection = Selection::default();
        selection.set_region(Some("CA".to_string()));
        selection.set_condition(Some("Heart".to_string()));

        assert!(selection.matches(&rec("CA", "90001", "Heart")));
        assert!(!selection.matches(&rec("CA", "90001", "Stroke")));
        assert!(!selection.matches(&rec("NY", "10001", "Heart")));
    }

    #[test]
    fn test_matches_respects_subregion_set() {
        let catalog = catalog();
        let mut selection = Selection::default();
        selection.set_region(Some("CA".to_string()));
        selection.set_subregions(&catalog, vec!["90001".to_string()]);

        assert!(selection.matches(&rec("CA", "90001", "Heart")));
        assert!(!selection.matches(&rec("CA", "90002", "Heart")));
    }
}
