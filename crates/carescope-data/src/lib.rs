//! # CareScope Data
//!
//! Dataset ingestion for the CareScope dashboard. Reads the hospital CSV
//! into the core [`Dataset`] type, validating the schema up front so a bad
//! file fails loudly at startup instead of rendering an empty dashboard.
//!
//! ## Key Operations
//!
//! - [`load_dataset`] - read and validate a CSV file from disk
//! - [`read_dataset`] - the same, from any [`std::io::Read`] source
//!
//! [`Dataset`]: carescope_core::Dataset

pub mod error;
pub mod loader;

pub use error::DataError;
pub use loader::{
    CONDITION_COLUMN, FACILITY_COLUMN, REGION_COLUMN, REQUIRED_COLUMNS, SCORE_COLUMN,
    SUBREGION_COLUMN, load_dataset, read_dataset,
};
