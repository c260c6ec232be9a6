//! Error types for carescope-data
//!
//! This module defines the error types surfaced while loading a dataset.

use thiserror::Error;

/// Errors that can occur while reading a dataset
#[derive(Debug, Error)]
pub enum DataError {
    /// I/O error while reading the dataset
    #[error("I/O error: {0}")]
    Io(String),

    /// The CSV layer rejected the input
    #[error("CSV error: {0}")]
    Csv(String),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A score cell did not parse as a number
    #[error("Invalid score {value:?} on line {line}")]
    InvalidScore { line: u64, value: String },
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err.to_string())
    }
}

impl DataError {
    /// Create a new MissingColumn error
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }

    /// Create a new InvalidScore error
    pub fn invalid_score(line: u64, value: impl Into<String>) -> Self {
        Self::InvalidScore {
            line,
            value: value.into(),
        }
    }

    /// Create a new I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_error() {
        let err = DataError::missing_column("Score");
        assert!(matches!(err, DataError::MissingColumn(_)));
        assert!(err.to_string().contains("Score"));
    }

    #[test]
    fn test_invalid_score_error_names_line_and_value() {
        let err = DataError::invalid_score(7, "n/a");
        assert!(matches!(err, DataError::InvalidScore { line: 7, .. }));
        let message = err.to_string();
        assert!(message.contains("line 7"));
        assert!(message.contains("n/a"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let data_err: DataError = io_err.into();
        assert!(matches!(data_err, DataError::Io(_)));
    }
}
