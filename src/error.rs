//! Error types for ranked progress views
//!
//! Record decoding and category lookups fail with [`ProgressError`]. Application
//! level code (configuration, the CLI) uses anyhow on top of it.

use crate::types::RankingType;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors raised while reading ranked progress records
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgressError {
    /// A required field is absent or does not hold the expected JSON type
    #[error("Missing field in ranked progress record: {field}")]
    MissingField { field: String },

    #[error("Invalid ranking category: {code}")]
    InvalidCategory { code: String },

    #[error("Malformed timestamp '{value}': {reason}")]
    MalformedTimestamp { value: String, reason: String },

    #[error("No ranked progress for category: {category}")]
    CategoryNotFound { category: RankingType },
}

impl ProgressError {
    pub(crate) fn missing(field: &str) -> Self {
        ProgressError::MissingField {
            field: field.to_string(),
        }
    }
}
