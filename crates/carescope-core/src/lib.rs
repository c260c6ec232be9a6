//! # CareScope Core
//!
//! The filtering and chart-projection pipeline behind the CareScope hospital
//! dashboard.
//!
//! This crate keeps a set of dependent selectors and a bar-chart view
//! consistent with an immutable in-memory dataset under cascading updates.
//! Everything here is pure and synchronous: the presentation shell owns the
//! one mutable [`Selection`] and calls these functions in response to user
//! events.
//!
//! ## Key Types
//!
//! - [`HospitalRecord`] / [`Dataset`]: one scored observation row and the
//!   fixed ordered collection of them
//! - [`OptionCatalog`]: distinct selector options derived from the dataset,
//!   including the region → sub-region index
//! - [`Selection`]: the current filter choices, with total transition
//!   functions that keep sub-regions consistent with the chosen region
//! - [`ChartSeries`]: the minimal data needed to draw the bar chart
//!
//! ## Key Operations
//!
//! - [`filter_records`]: (dataset, selection) → matching records, stable
//! - [`project_series`]: matching records → bar-chart series

pub mod catalog;
pub mod chart;
pub mod filter;
pub mod record;
pub mod selection;

// Re-export main types
pub use catalog::OptionCatalog;
pub use chart::{CHART_TITLE, ChartBar, ChartSeries, X_AXIS_LABEL, Y_AXIS_LABEL, project_series};
pub use filter::filter_records;
pub use record::{Dataset, HospitalRecord};
pub use selection::Selection;
