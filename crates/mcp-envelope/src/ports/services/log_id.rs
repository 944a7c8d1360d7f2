//! Log ID Service Port
//!
//! Source of opaque identifiers attached to every successful response.

/// Generates a fresh, non-empty identifier on every call
pub trait LogIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
