//! Filter sidebar with the state, zipcode, and condition selectors.

use dioxus::prelude::*;

use crate::state::DashboardState;

/// Left-hand filter column.
#[component]
pub fn FilterSidebar(state: Signal<DashboardState>) -> Element {
    let mut state_write = state;

    rsx! {
        aside {
            class: "sidebar",

            section {
                class: "sidebar-section",
                h2 { class: "sidebar-section-title", "State" }
                StateSelect { state }
            }

            section {
                class: "sidebar-section",
                h2 { class: "sidebar-section-title", "Zipcodes" }
                ZipcodeChecklist { state }
            }

            section {
                class: "sidebar-section",
                h2 { class: "sidebar-section-title", "Condition" }
                ConditionPicker { state }
            }

            button {
                class: "reset-button",
                onclick: move |_| {
                    state_write.write().reset_filters();
                },
                "Reset filters"
            }
        }
    }
}

/// Single-choice state dropdown. The placeholder row doubles as the way
/// back to "no state selected".
#[component]
fn StateSelect(state: Signal<DashboardState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();
    let selected = state_read.selection().region.clone().unwrap_or_default();

    rsx! {
        select {
            class: "filter-select",
            value: "{selected}",
            onchange: move |evt| {
                let value = evt.value();
                let region = if value.is_empty() { None } else { Some(value) };
                state_write.write().set_region(region);
            },
            option { value: "", "Select State" }
            for region in state_read.region_options() {
                option {
                    value: "{region}",
                    selected: *region == selected,
                    "{region}"
                }
            }
        }
    }
}

/// Multi-choice zipcode checklist, scoped to the selected state.
#[component]
fn ZipcodeChecklist(state: Signal<DashboardState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();

    if state_read.selection().region.is_none() {
        return rsx! {
            p { class: "sidebar-hint", "Select a state to list its zipcodes." }
        };
    }

    let options = state_read.subregion_options();

    rsx! {
        div {
            class: "option-list",
            for zipcode in options.iter() {
                {
                    let checked = state_read.selection().subregions.contains(zipcode);
                    let toggle_value = zipcode.clone();
                    rsx! {
                        label {
                            class: "option-row",
                            input {
                                r#type: "checkbox",
                                checked: checked,
                                onchange: move |_| {
                                    state_write.write().toggle_subregion(&toggle_value);
                                },
                            }
                            span { class: "option-label", "{zipcode}" }
                        }
                    }
                }
            }
        }
    }
}

/// Single-choice condition radios, with an explicit row for no condition.
#[component]
fn ConditionPicker(state: Signal<DashboardState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();
    let selected = state_read.selection().condition.clone();

    rsx! {
        div {
            class: "radio-group",
            label {
                class: "option-row",
                input {
                    r#type: "radio",
                    name: "condition",
                    value: "",
                    checked: selected.is_none(),
                    onchange: move |_| state_write.write().set_condition(None),
                }
                span { class: "option-label", "Any condition" }
            }
            for condition in state_read.condition_options() {
                {
                    let is_checked = selected.as_deref() == Some(condition.as_str());
                    let chosen = condition.clone();
                    rsx! {
                        label {
                            class: "option-row",
                            input {
                                r#type: "radio",
                                name: "condition",
                                value: "{condition}",
                                checked: is_checked,
                                onchange: move |_| {
                                    state_write.write().set_condition(Some(chosen.clone()));
                                },
                            }
                            span { class: "option-label", "{condition}" }
                        }
                    }
                }
            }
        }
    }
}
