//! CSV dataset ingestion.
//!
//! The dataset is a headered CSV file. Columns are matched by header name,
//! not position, so column order and extra columns are both fine. ZIP codes
//! stay strings end to end, which preserves leading zeros.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use carescope_core::{Dataset, HospitalRecord};

use crate::error::DataError;

/// Header of the region column.
pub const REGION_COLUMN: &str = "State";
/// Header of the sub-region column.
pub const SUBREGION_COLUMN: &str = "ZIP Code";
/// Header of the condition column.
pub const CONDITION_COLUMN: &str = "Condition";
/// Header of the facility name column.
pub const FACILITY_COLUMN: &str = "Hospital Name";
/// Header of the score column.
pub const SCORE_COLUMN: &str = "Score";

/// Every column a dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    REGION_COLUMN,
    SUBREGION_COLUMN,
    CONDITION_COLUMN,
    FACILITY_COLUMN,
    SCORE_COLUMN,
];

/// One CSV row as it appears on disk, before score parsing.
///
/// Score is read as a string so a bad cell can be reported with its raw
/// value and line number instead of a generic deserialize error.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "ZIP Code")]
    zip_code: String,
    #[serde(rename = "Condition")]
    condition: String,
    #[serde(rename = "Hospital Name")]
    hospital_name: String,
    #[serde(rename = "Score")]
    score: String,
}

/// Read a dataset from any CSV source.
///
/// The header row is validated first so a missing column is reported by
/// name rather than failing row by row. Scores must parse as numbers
/// (surrounding whitespace tolerated); the first bad cell aborts the load
/// with its line number. A file with headers but no rows is a valid, empty
/// dataset.
pub fn read_dataset<R: io::Read>(reader: R) -> Result<Dataset, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DataError::missing_column(required));
        }
    }

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: RawRow = record.deserialize(Some(&headers))?;

        let score: f64 = row
            .score
            .trim()
            .parse()
            .map_err(|_| DataError::invalid_score(line, row.score.clone()))?;

        records.push(HospitalRecord {
            region: row.state,
            subregion: row.zip_code,
            condition: row.condition,
            facility_name: row.hospital_name,
            score,
        });
    }

    Ok(Dataset::new(records))
}

/// Load a dataset from a file on disk.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DataError> {
    let path = path.as_ref();
    info!("Loading dataset from {}", path.display());

    let file = File::open(path)?;
    let dataset = read_dataset(file)?;

    info!("Loaded {} hospital records", dataset.len());
    Ok(dataset)
}
