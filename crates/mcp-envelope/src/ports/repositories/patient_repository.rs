//! Patient Repository Port
//!
//! Abstract interface for EHR record lookups.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Patient};

/// Repository interface for patient records
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Find a patient by ID
    async fn find_by_id(&self, patient_id: &str) -> Result<Option<Patient>, DomainError>;
}
