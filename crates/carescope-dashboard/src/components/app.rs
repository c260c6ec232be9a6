//! Root application component for the CareScope dashboard.

use dioxus::prelude::*;

use crate::state::DashboardState;
use crate::theme::{ThemeToggle, ThemedRoot};

use super::{ChartPanel, FilterSidebar, HospitalList};

/// Root application component.
#[component]
pub fn App(state: Signal<DashboardState>) -> Element {
    rsx! {
        ThemedRoot {
            div {
                class: "dashboard",

                // Header
                Header { state }

                // Main content area - filters on the left, results on the right
                main {
                    class: "main-content",

                    FilterSidebar { state }

                    div {
                        class: "content-panel",

                        ChartPanel { state }
                        HospitalList { state }
                    }
                }
            }
        }
    }
}

/// Header with title, description, and the record count.
#[component]
fn Header(state: Signal<DashboardState>) -> Element {
    let state_read = state.read();
    let shown = state_read.filtered_count();
    let total = state_read.total_count();

    rsx! {
        header {
            class: "header",

            div {
                class: "header-left",
                h1 {
                    class: "header-title",
                    "Hospital's Near You Dashboard"
                }
                p {
                    class: "header-description",
                    "Select the state and/or zipcode you would like to find a hospital in, "
                    "and the condition you are going to the hospital for. Matching hospitals "
                    "are listed and scored; the higher the score, the better the hospital."
                }
            }

            div {
                class: "header-right",

                div {
                    class: "record-badge",
                    span { class: "record-count", "{shown}/{total}" }
                    span { class: "record-label", "hospitals" }
                }

                ThemeToggle {}
            }
        }
    }
}
