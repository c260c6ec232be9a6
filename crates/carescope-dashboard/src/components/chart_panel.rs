//! Chart panel wrapping the score bar chart.

use dioxus::prelude::*;

use super::BarChart;
use crate::state::DashboardState;

/// Score chart plus a line saying how much of the dataset survived the
/// filters.
#[component]
pub fn ChartPanel(state: Signal<DashboardState>) -> Element {
    let state_read = state.read();
    let series = state_read.chart_series();
    let shown = series.len();
    let total = state_read.total_count();

    rsx! {
        section {
            class: "panel chart-panel",

            BarChart { series }

            div {
                class: "chart-count",
                "Showing {shown} of {total} hospitals"
            }
        }
    }
}
