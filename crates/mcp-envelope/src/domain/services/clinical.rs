//! Clinical Aggregator
//!
//! Resolves a patient, then looks up a guideline for each of the patient's
//! conditions concurrently.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::try_join_all;

use super::aggregator::{bounded, Aggregator, DEFAULT_LOOKUP_TIMEOUT};
use crate::domain::{Advice, ClinicalAdvice, DomainError, NO_GUIDELINE_FOUND};
use crate::ports::{GuidelineRepository, LogIdGenerator, PatientRepository};

/// Aggregator behind `POST /mcp/clinical-advice`
pub struct ClinicalAggregator<P, R, G>
where
    P: PatientRepository,
    R: GuidelineRepository,
    G: LogIdGenerator,
{
    patients: Arc<P>,
    guidelines: Arc<R>,
    log_ids: Arc<G>,
    lookup_timeout: Duration,
}

impl<P, R, G> ClinicalAggregator<P, R, G>
where
    P: PatientRepository,
    R: GuidelineRepository,
    G: LogIdGenerator,
{
    pub fn new(patients: Arc<P>, guidelines: Arc<R>, log_ids: Arc<G>) -> Self {
        Self {
            patients,
            guidelines,
            log_ids,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    async fn guideline_for(&self, condition: &str) -> Result<String, DomainError> {
        let lookup = format!("guideline for '{condition}'");
        let guideline = bounded(
            &lookup,
            self.lookup_timeout,
            self.guidelines.find_guideline(condition),
        )
        .await?;

        Ok(guideline.unwrap_or_else(|| NO_GUIDELINE_FOUND.to_string()))
    }
}

#[async_trait]
impl<P, R, G> Aggregator for ClinicalAggregator<P, R, G>
where
    P: PatientRepository,
    R: GuidelineRepository,
    G: LogIdGenerator,
{
    type Output = ClinicalAdvice;

    fn name(&self) -> &'static str {
        "clinical-advice"
    }

    async fn aggregate(&self, patient_id: &str) -> Result<ClinicalAdvice, DomainError> {
        let patient = bounded(
            "patient record",
            self.lookup_timeout,
            self.patients.find_by_id(patient_id),
        )
        .await?
        .ok_or_else(|| DomainError::not_found("Patient", patient_id))?;

        let guidelines = try_join_all(
            patient
                .conditions
                .iter()
                .map(|condition| self.guideline_for(condition)),
        )
        .await?;

        let advice: Advice = patient.conditions.iter().zip(guidelines).collect();

        tracing::debug!(
            patient_id,
            conditions = advice.len(),
            "Clinical lookups resolved"
        );

        Ok(ClinicalAdvice {
            patient: patient.name,
            advice,
            log_id: self.log_ids.generate(),
        })
    }
}
