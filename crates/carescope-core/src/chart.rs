//! Projecting filtered records into a renderable chart series.

use serde::{Deserialize, Serialize};

use crate::record::HospitalRecord;

/// Chart heading. Constant regardless of what the filters select.
pub const CHART_TITLE: &str = "Scores based on Zipcode, State, and Condition";

/// Horizontal axis label.
pub const X_AXIS_LABEL: &str = "Hospitals";

/// Vertical axis label.
pub const Y_AXIS_LABEL: &str = "Score";

/// One bar of the score chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Facility name shown under the bar.
    pub label: String,
    pub value: f64,
}

/// A fully described bar chart, ready for a renderer.
///
/// Carries its own titles so renderers need no other context. The bar list
/// mirrors the filtered records one-to-one; this module never aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<ChartBar>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Largest bar value, for scale derivation. Zero when there are no bars.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().fold(0.0_f64, |acc, bar| acc.max(bar.value))
    }
}

/// Project filtered records into a bar series.
///
/// One bar per record, in the order given. Facilities appearing twice get
/// two bars; deduplication and aggregation are deliberately absent, so the
/// chart shows exactly what the filter passed. Zero records yields a series
/// with no bars, which renderers present as an explicit empty state.
pub fn project_series(records: &[&HospitalRecord]) -> ChartSeries {
    ChartSeries {
        title: CHART_TITLE.to_string(),
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
        bars: records
            .iter()
            .map(|record| ChartBar {
                label: record.facility_name.clone(),
                value: record.score,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, score: f64) -> HospitalRecord {
        HospitalRecord {
            region: "CA".to_string(),
            subregion: "90001".to_string(),
            condition: "Heart".to_string(),
            facility_name: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_one_bar_per_record_in_order() {
        let a = rec("Mercy", 3.5);
        let b = rec("Harbor", 4.0);
        let series = project_series(&[&a, &b]);

        assert_eq!(series.len(), 2);
        assert_eq!(series.bars[0].label, "Mercy");
        assert_eq!(series.bars[0].value, 3.5);
        assert_eq!(series.bars[1].label, "Harbor");
        assert_eq!(series.bars[1].value, 4.0);
    }

    #[test]
    fn test_duplicate_facilities_get_separate_bars() {
        let a = rec("Mercy", 3.5);
        let b = rec("Mercy", 2.0);
        let series = project_series(&[&a, &b]);

        assert_eq!(series.len(), 2);
        assert_eq!(series.bars[0].value, 3.5);
        assert_eq!(series.bars[1].value, 2.0);
    }

    #[test]
    fn test_titles_are_constant() {
        let a = rec("Mercy", 3.5);
        let with_bars = project_series(&[&a]);
        let without_bars = project_series(&[]);

        assert_eq!(with_bars.title, CHART_TITLE);
        assert_eq!(with_bars.x_label, X_AXIS_LABEL);
        assert_eq!(with_bars.y_label, Y_AXIS_LABEL);
        assert_eq!(without_bars.title, with_bars.title);
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        let series = project_series(&[]);
        assert!(series.is_empty());
        assert_eq!(series.max_value(), 0.0);
    }

    #[test]
    fn test_max_value_over_bars() {
        let a = rec("Mercy", 3.5);
        let b = rec("Harbor", 9.25);
        let c = rec("St. Luke", 1.0);
        let series = project_series(&[&a, &b, &c]);

        assert_eq!(series.max_value(), 9.25);
    }
}
