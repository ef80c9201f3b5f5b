//! Error types for skidka.

use thiserror::Error;

/// Result type alias for skidka operations.
pub type Result<T> = std::result::Result<T, SkidkaError>;

/// Errors that can occur during offer collection and export.
#[derive(Error, Debug)]
pub enum SkidkaError {
    /// HTTP request failed at the connection level.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body was not valid JSON.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A raw record was missing a required field or had the wrong shape.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Item category not found in the registry.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The collection run produced zero records, so there is nothing to export.
    #[error("No promo data available for store {store}")]
    NoData {
        /// The store that had no data.
        store: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Export artifact error.
    #[error("Export error: {0}")]
    Export(String),
}
