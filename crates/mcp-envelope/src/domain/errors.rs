//! Domain Errors
//!
//! Error types for domain operations.

use std::time::Duration;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Timed out after {elapsed:?} waiting for {lookup}")]
    Timeout { lookup: String, elapsed: Duration },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn timeout<T: AsRef<str>>(lookup: T, elapsed: Duration) -> Self {
        Self::Timeout {
            lookup: lookup.as_ref().to_string(),
            elapsed,
        }
    }

    /// Message placed in the `error` field of a response envelope.
    pub fn payload_message(&self) -> String {
        match self {
            Self::NotFound { entity_type, .. } => format!("{entity_type} not found."),
            Self::Timeout { lookup, .. } => format!("Timed out waiting for {lookup}."),
            Self::Validation(msg) => format!("Invalid request: {msg}"),
            Self::Repository(msg) => format!("Lookup failed: {msg}"),
        }
    }
}
