//! Infrastructure Adapters
//!
//! Implementations of domain ports for the demo collaborators.

pub mod log_id;
pub mod memory;

// Re-exports
pub use log_id::UuidLogIdGenerator;
pub use memory::{InMemoryBank, InMemoryGuidelines, InMemoryPatients, InMemoryPortfolios};
