//! Context loading errors

use super::StacheError;

/// Creates a context parse failed error
pub fn parse_failed(
    format: impl Into<String>,
    origin: impl Into<String>,
    reason: impl Into<String>,
) -> StacheError {
    StacheError::ContextParseFailed {
        format: format.into(),
        origin: origin.into(),
        reason: reason.into(),
    }
}

/// Creates a CSV open failed error
pub fn csv_open_failed(path: impl Into<String>, reason: impl Into<String>) -> StacheError {
    StacheError::CsvOpenFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a CSV parse failed error
pub fn csv_parse_failed(origin: impl Into<String>, reason: impl Into<String>) -> StacheError {
    StacheError::CsvParseFailed {
        origin: origin.into(),
        reason: reason.into(),
    }
}

/// Creates a not-a-mapping error
pub fn not_mapping(found: impl Into<String>) -> StacheError {
    StacheError::ContextNotMapping {
        found: found.into(),
    }
}

/// Creates a rows required error for fan-out mode
pub fn rows_required(key: impl Into<String>) -> StacheError {
    StacheError::RowsRequired { key: key.into() }
}
