//! Pure SVG chart components for the dashboard
//!
//! Charts render directly as SVG elements within Dioxus RSX, using CSS
//! variables for theming so they follow the active theme for free.

use dioxus::prelude::*;

use carescope_core::ChartSeries;

/// Bar chart for hospital scores
///
/// One bar per record in the series, in series order. The series carries
/// its own title and axis labels.
#[component]
pub fn BarChart(
    /// Fully described series to render
    series: ChartSeries,
    /// Chart width in pixels
    #[props(default = 760)]
    width: u32,
    /// Chart height in pixels
    #[props(default = 420)]
    height: u32,
) -> Element {
    if series.is_empty() {
        return rsx! {
            div {
                class: "chart-container chart-empty",
                style: "width: {width}px; height: {height}px;",

                div { class: "chart-title", "{series.title}" }
                div { class: "chart-empty-message", "No hospitals match the current filters" }
            }
        };
    }

    let y_max = (series.max_value() * 1.1).max(1.0);

    // Padding for title and axis labels
    let padding_left = 55.0;
    let padding_right = 15.0;
    let padding_top = 40.0;
    let padding_bottom = 45.0;

    let plot_width = width as f64 - padding_left - padding_right;
    let plot_height = height as f64 - padding_top - padding_bottom;

    let scale_y = |v: f64| padding_top + (1.0 - v / y_max) * plot_height;

    let band = plot_width / series.len() as f64;
    let bar_width = band * 0.7;
    let baseline = scale_y(0.0);

    // Per-bar labels fit only while bands stay wide enough; past that the
    // first and last labels anchor the axis instead.
    let per_bar_labels = band >= 34.0;

    let grid_lines_y = 4;
    let y_grid_step = y_max / grid_lines_y as f64;

    let x_title_x = padding_left + plot_width / 2.0;
    let y_title_y = padding_top + plot_height / 2.0;

    rsx! {
        div {
            class: "chart-container",
            style: "width: {width}px; height: {height}px;",

            div { class: "chart-title", "{series.title}" }

            svg {
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",

                // Grid lines and y-axis ticks
                for i in 0..=grid_lines_y {
                    {
                        let y_val = (i as f64) * y_grid_step;
                        let y_pos = scale_y(y_val);
                        rsx! {
                            line {
                                x1: "{padding_left}",
                                y1: "{y_pos:.1}",
                                x2: "{width as f64 - padding_right}",
                                y2: "{y_pos:.1}",
                                stroke: "var(--border-color)",
                                stroke_dasharray: "2,2",
                                stroke_width: "1",
                            }
                            text {
                                x: "{padding_left - 6.0}",
                                y: "{y_pos:.1}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                font_size: "10",
                                fill: "var(--text-muted)",
                                "{y_val:.1}"
                            }
                        }
                    }
                }

                // Bars
                for (i, bar) in series.bars.iter().enumerate() {
                    {
                        let x = padding_left + (i as f64) * band + (band - bar_width) / 2.0;
                        let top = scale_y(bar.value.max(0.0));
                        let bar_height = (baseline - top).max(0.0);
                        let label_x = padding_left + (i as f64 + 0.5) * band;
                        let label = truncate_label(&bar.label, 12);
                        rsx! {
                            rect {
                                x: "{x:.1}",
                                y: "{top:.1}",
                                width: "{bar_width:.1}",
                                height: "{bar_height:.1}",
                                fill: "var(--accent-primary)",
                                rx: "2",
                            }
                            if per_bar_labels {
                                text {
                                    x: "{label_x:.1}",
                                    y: "{baseline + 14.0}",
                                    text_anchor: "middle",
                                    font_size: "10",
                                    fill: "var(--text-muted)",
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                // First/last labels when bands are too narrow for one each
                if !per_bar_labels && series.len() >= 2 {
                    {
                        let first = truncate_label(&series.bars[0].label, 16);
                        let last = truncate_label(&series.bars[series.len() - 1].label, 16);
                        rsx! {
                            text {
                                x: "{padding_left}",
                                y: "{baseline + 14.0}",
                                text_anchor: "start",
                                font_size: "10",
                                fill: "var(--text-muted)",
                                "{first}"
                            }
                            text {
                                x: "{width as f64 - padding_right}",
                                y: "{baseline + 14.0}",
                                text_anchor: "end",
                                font_size: "10",
                                fill: "var(--text-muted)",
                                "{last}"
                            }
                        }
                    }
                }

                // Baseline
                line {
                    x1: "{padding_left}",
                    y1: "{baseline:.1}",
                    x2: "{width as f64 - padding_right}",
                    y2: "{baseline:.1}",
                    stroke: "var(--border-color)",
                    stroke_width: "1",
                }

                // Axis titles
                text {
                    x: "{x_title_x:.1}",
                    y: "{height as f64 - 8.0}",
                    text_anchor: "middle",
                    font_size: "11",
                    fill: "var(--text-secondary)",
                    "{series.x_label}"
                }
                text {
                    x: "14",
                    y: "{y_title_y:.1}",
                    text_anchor: "middle",
                    font_size: "11",
                    fill: "var(--text-secondary)",
                    transform: "rotate(-90 14 {y_title_y:.1})",
                    "{series.y_label}"
                }
            }
        }
    }
}

/// Shorten a facility name so bar labels stay inside their band.
fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let keep: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{keep}…")
    }
}
