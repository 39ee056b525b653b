//! Error types for sheet reads

use thiserror::Error;

/// Result type for read operations
pub type ReadResult<T> = std::result::Result<T, ReadError>;

/// Errors that abort a read
///
/// Every failure is fatal for the read that raised it: no partial result is
/// returned.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The requested sheet does not exist in the grid
    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    /// The record factory could not produce a record
    #[error(transparent)]
    RecordCreation(#[from] RecordCreationError),

    /// The property setter rejected a key or a value
    #[error("Cannot assign property '{key}' at row {row}, column {column}: {source}")]
    PropertyAssignment {
        row: u32,
        column: u16,
        key: String,
        #[source]
        source: PropertyError,
    },

    /// The grid source could not be opened
    #[error("Cannot open grid source: {0}")]
    Source(String),

    /// CSV loading error
    #[error("CSV error: {0}")]
    Csv(#[from] sheetbind_csv::CsvError),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetbind_core::Error),
}

/// A property setter refused a key/value pair
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// The record has no property with this name
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// The value cannot be converted to the property's type
    #[error("cannot convert {value} to {expected} for property '{key}'")]
    IncompatibleValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// A record factory failed to build a record
#[derive(Debug, Error)]
#[error("Impossible to create record: {message}")]
pub struct RecordCreationError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RecordCreationError {
    /// Create an error with a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping the failure that prevented construction
    pub fn with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }
}
