//! Repository Ports
//!
//! Read-only lookups against the data collaborators.

mod bank_repository;
mod guideline_repository;
mod patient_repository;
mod portfolio_repository;

pub use bank_repository::*;
pub use guideline_repository::*;
pub use patient_repository::*;
pub use portfolio_repository::*;
