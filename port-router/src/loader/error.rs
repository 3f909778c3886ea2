//! Loader error types.

use std::path::PathBuf;

use crate::domain::TimeError;

/// Errors that stop a load altogether.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A data file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single line of a data file was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Too few or too many whitespace-separated fields
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: &'static str, found: usize },

    /// A numeric field did not parse
    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A charge or fare below zero
    #[error("negative {field}: {value}")]
    Negative { field: &'static str, value: i64 },

    /// A date or clock time did not parse
    #[error(transparent)]
    Time(#[from] TimeError),

    /// A sailing names a port missing from the ports file
    #[error("unknown port in sailing {origin} -> {destination}")]
    UnknownPort { origin: String, destination: String },
}
