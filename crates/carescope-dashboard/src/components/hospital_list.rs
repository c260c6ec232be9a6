//! Hospital list panel.

use dioxus::prelude::*;

use crate::state::{DashboardState, format_score};

/// The filtered hospitals as rows, mirroring the chart one-to-one.
#[component]
pub fn HospitalList(state: Signal<DashboardState>) -> Element {
    let state_read = state.read();
    let records = state_read.filtered_records();

    rsx! {
        section {
            class: "panel list-panel",

            h2 { class: "panel-title", "Hospitals" }

            if records.is_empty() {
                p { class: "list-empty", "No hospitals match the current filters." }
            } else {
                div {
                    class: "hospital-list",

                    div {
                        class: "hospital-row hospital-row-header",
                        span { class: "hospital-name", "Hospital" }
                        span { class: "hospital-state", "State" }
                        span { class: "hospital-zipcode", "Zipcode" }
                        span { class: "hospital-condition", "Condition" }
                        span { class: "hospital-score", "Score" }
                    }

                    for record in records.iter() {
                        div {
                            class: "hospital-row",
                            span { class: "hospital-name", "{record.facility_name}" }
                            span { class: "hospital-state", "{record.region}" }
                            span { class: "hospital-zipcode", "{record.subregion}" }
                            span { class: "hospital-condition", "{record.condition}" }
                            span { class: "hospital-score", "{format_score(record.score)}" }
                        }
                    }
                }
            }
        }
    }
}
