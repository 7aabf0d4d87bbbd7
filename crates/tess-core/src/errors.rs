//! Cross-cutting error types for Tessera.
//!
//! Projection itself never fails: unknown field types and missing metadata
//! degrade to defaults. These errors cover loading and validating the
//! schema and record data that feed it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A field or record failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A field descriptor carries options that do not fit its type.
    #[error("Invalid options for field {field_id}: {reason}")]
    InvalidFieldOptions { field_id: String, reason: String },

    /// Snapshot JSON could not be parsed.
    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
