use thiserror::Error;

/// Invariant violations of a processing log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    #[error(
        "duplicate processing log entry for variable '{variable}' (operation '{operation}', target '{target}')"
    )]
    DuplicateEntry {
        variable: String,
        operation: String,
        target: String,
    },

    #[error("processing log record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("processing log record {index} has invalid field '{field}': expected {expected}")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}
