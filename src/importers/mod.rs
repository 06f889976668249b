//! Importers for card issuer transaction exports.

use thiserror::Error;

pub mod cal;

/// Failure while converting an export document to ledger entries. The first
/// failure aborts the whole document; there is no per-transaction recovery.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input was not well-formed JSON (or a field had a structurally
    /// wrong type).
    #[error("invalid JSON input: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required transaction field, or the expected array path, was absent.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
    /// A field was present but its value could not be interpreted.
    #[error("malformed value in field {field}: {reason}")]
    MalformedValue {
        field: &'static str,
        reason: String,
    },
}

impl ImportError {
    pub fn missing_field(field: &'static str) -> ImportError {
        ImportError::MissingField { field }
    }
}
