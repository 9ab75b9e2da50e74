//! Module for exporting and reloading yield tables
pub mod csv_export;
pub mod json;

use thiserror::Error;

/// Errors arising while persisting or reloading a yield table
#[derive(Debug, Error)]
pub enum IoError {
    /// The file could not be opened, created or read
    #[error("io failure: {0}")]
    File(#[from] std::io::Error),
    /// Writing a CSV record failed
    #[error("csv failure: {0}")]
    Csv(#[from] csv::Error),
    /// JSON serialization or deserialization failed
    #[error("json failure: {0}")]
    Json(#[from] serde_json::Error),
}
