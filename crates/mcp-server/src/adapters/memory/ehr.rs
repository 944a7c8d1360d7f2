//! In-memory EHR: patient records and medical guidelines

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use mcp_envelope::{DomainError, GuidelineRepository, Patient, PatientRepository};

use super::simulate_latency;

/// In-memory implementation of PatientRepository
pub struct InMemoryPatients {
    patients: HashMap<String, Patient>,
    latency: Duration,
}

impl InMemoryPatients {
    pub fn new(latency: Duration) -> Self {
        Self {
            patients: HashMap::new(),
            latency,
        }
    }

    /// Records for `patient_001` and `patient_002`
    pub fn seeded(latency: Duration) -> Self {
        Self::new(latency)
            .with_patient(
                Patient::new("patient_001", "Alice Johnson", 58)
                    .with_conditions(["hypertension", "type 2 diabetes"])
                    .with_medications(["metformin", "lisinopril"]),
            )
            .with_patient(
                Patient::new("patient_002", "Mark Lee", 45)
                    .with_conditions(["asthma"])
                    .with_medications(["albuterol"]),
            )
    }

    pub fn with_patient(mut self, patient: Patient) -> Self {
        self.patients.insert(patient.id.clone(), patient);
        self
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatients {
    async fn find_by_id(&self, patient_id: &str) -> Result<Option<Patient>, DomainError> {
        simulate_latency(self.latency).await;
        Ok(self.patients.get(patient_id).cloned())
    }
}

/// In-memory implementation of GuidelineRepository
pub struct InMemoryGuidelines {
    guidelines: HashMap<String, String>,
    latency: Duration,
}

impl InMemoryGuidelines {
    pub fn new(latency: Duration) -> Self {
        Self {
            guidelines: HashMap::new(),
            latency,
        }
    }

    pub fn seeded(latency: Duration) -> Self {
        Self::new(latency)
            .with_guideline(
                "hypertension",
                "Recommend low-sodium diet and ACE inhibitors.",
            )
            .with_guideline(
                "type 2 diabetes",
                "Suggest metformin and regular HbA1c monitoring.",
            )
            .with_guideline(
                "asthma",
                "Use inhaled corticosteroids and monitor peak flow.",
            )
    }

    pub fn with_guideline(
        mut self,
        condition: impl Into<String>,
        guideline: impl Into<String>,
    ) -> Self {
        self.guidelines.insert(condition.into(), guideline.into());
        self
    }
}

#[async_trait]
impl GuidelineRepository for InMemoryGuidelines {
    async fn find_guideline(&self, condition: &str) -> Result<Option<String>, DomainError> {
        simulate_latency(self.latency).await;
        Ok(self.guidelines.get(condition).cloned())
    }
}
