//! Dashboard state management.
//!
//! One [`DashboardState`] lives in a Dioxus signal at the root of the
//! component tree. The dataset and its option catalog are fixed at startup;
//! only the selection mutates. Components call the setters here, which
//! delegate the transition rules to carescope-core, and read the derived
//! views on every render.

use std::collections::BTreeSet;

use tracing::debug;

use carescope_core::{
    ChartSeries, Dataset, HospitalRecord, OptionCatalog, Selection, filter_records, project_series,
};

/// Everything the dashboard renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    dataset: Dataset,
    catalog: OptionCatalog,
    selection: Selection,
}

impl DashboardState {
    /// Build the state around a loaded dataset. The selection starts
    /// unconstrained, so the first frame shows every hospital.
    pub fn new(dataset: Dataset) -> Self {
        let catalog = OptionCatalog::build(&dataset);
        debug!(
            "Dashboard state ready: {} records, {} states, {} conditions",
            dataset.len(),
            catalog.regions.len(),
            catalog.conditions.len()
        );
        Self {
            dataset,
            catalog,
            selection: Selection::default(),
        }
    }

    // ---- Selection mutators ----

    pub fn set_region(&mut self, region: Option<String>) {
        debug!("State filter -> {:?}", region);
        self.selection.set_region(region);
    }

    pub fn toggle_subregion(&mut self, subregion: &str) {
        debug!("Toggle zipcode {}", subregion);
        self.selection.toggle_subregion(&self.catalog, subregion);
    }

    pub fn set_condition(&mut self, condition: Option<String>) {
        debug!("Condition filter -> {:?}", condition);
        self.selection.set_condition(condition);
    }

    pub fn reset_filters(&mut self) {
        debug!("Filters reset");
        self.selection.reset();
    }

    // ---- Derived views ----

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// States offered by the region selector.
    pub fn region_options(&self) -> &[String] {
        &self.catalog.regions
    }

    /// Conditions offered by the condition selector.
    pub fn condition_options(&self) -> &[String] {
        &self.catalog.conditions
    }

    /// Zipcodes offered under the currently selected state. Empty until a
    /// state is chosen.
    pub fn subregion_options(&self) -> BTreeSet<String> {
        self.catalog
            .subregion_options(self.selection.region.as_deref())
    }

    /// Records passing the current filters, in dataset order.
    pub fn filtered_records(&self) -> Vec<&HospitalRecord> {
        filter_records(&self.dataset, &self.selection)
    }

    /// The chart series for the current filters.
    pub fn chart_series(&self) -> ChartSeries {
        project_series(&self.filtered_records())
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_records().len()
    }

    pub fn total_count(&self) -> usize {
        self.dataset.len()
    }
}

/// Render a score without trailing zero noise ("4" rather than "4.00").
pub fn format_score(score: f64) -> String {
    let text = format!("{:.2}", score);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
