//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity for provided {lookup} does not exist: {entity_type}")]
    NotFound { entity_type: String, lookup: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    /// Lookup by identity yielded nothing
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            lookup: format!("id {}", id),
        }
    }

    /// Lookup by a query parameter yielded nothing
    pub fn not_found_by<T: AsRef<str>>(entity_type: T, parameter: &str, value: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            lookup: format!("parameter {} = '{}'", parameter, value),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
