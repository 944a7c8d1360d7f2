//! Envelope Handler
//!
//! Binds an [`Aggregator`] to the correlation-id protocol. The response
//! always carries the request's `request_id`; aggregation failures become
//! an `{"error": ...}` result rather than an `Err`.

use std::sync::Arc;

use super::aggregator::Aggregator;
use crate::domain::{DomainError, RequestEnvelope, ResponseEnvelope};

pub struct EnvelopeHandler<A: Aggregator> {
    aggregator: Arc<A>,
}

impl<A: Aggregator> Clone for EnvelopeHandler<A> {
    fn clone(&self) -> Self {
        Self {
            aggregator: self.aggregator.clone(),
        }
    }
}

impl<A: Aggregator> EnvelopeHandler<A> {
    pub fn new(aggregator: Arc<A>) -> Self {
        Self { aggregator }
    }

    /// Handle one request. Never fails.
    pub async fn handle(&self, request: RequestEnvelope) -> ResponseEnvelope<A::Output> {
        let variant = self.aggregator.name();
        tracing::info!(
            variant,
            request_id = request.request_id(),
            action = request.action(),
            subject_id = request.subject_id(),
            "Handling envelope"
        );

        match self.aggregator.aggregate(request.subject_id()).await {
            Ok(payload) => ResponseEnvelope::success(request.request_id(), payload),
            Err(err) => {
                match &err {
                    DomainError::Repository(_) => {
                        tracing::error!(variant, request_id = request.request_id(), "{}", err)
                    }
                    _ => tracing::warn!(variant, request_id = request.request_id(), "{}", err),
                }
                ResponseEnvelope::failure(request.request_id(), &err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::testing::{FixtureStore, SequentialLogIds};
    use crate::domain::{ClinicalAggregator, FinancialAggregator, Patient};
    use serde_json::json;
    use std::collections::HashMap;
    use std::time::Duration;

    fn clinical() -> EnvelopeHandler<ClinicalAggregator<FixtureStore, FixtureStore, SequentialLogIds>>
    {
        let store = Arc::new(FixtureStore {
            patients: HashMap::from([(
                "p1".to_string(),
                Patient::new("p1", "Ada", 40).with_conditions(["flu"]),
            )]),
            ..Default::default()
        });
        EnvelopeHandler::new(Arc::new(ClinicalAggregator::new(
            store.clone(),
            store,
            Arc::new(SequentialLogIds::default()),
        )))
    }

    fn financial(
        store: FixtureStore,
    ) -> EnvelopeHandler<FinancialAggregator<FixtureStore, FixtureStore, SequentialLogIds>> {
        let store = Arc::new(store);
        EnvelopeHandler::new(Arc::new(
            FinancialAggregator::new(store.clone(), store, Arc::new(SequentialLogIds::default()))
                .with_lookup_timeout(Duration::from_millis(20)),
        ))
    }

    #[tokio::test]
    async fn test_request_id_is_echoed_on_success_and_failure() {
        let handler = clinical();
        for (request_id, patient_id) in [("r-1", "p1"), ("r-2", "missing"), ("  odd id ", "p1")] {
            let request = RequestEnvelope::new(request_id, "advise", patient_id).unwrap();
            let response = handler.handle(request).await;
            assert_eq!(response.request_id, request_id);
        }
    }

    #[tokio::test]
    async fn test_not_found_becomes_error_payload() {
        let request = RequestEnvelope::new("r-3", "advise", "missing").unwrap();
        let response = clinical().handle(request).await;

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"request_id": "r-3", "result": {"error": "Patient not found."}})
        );
    }

    #[tokio::test]
    async fn test_success_payload_carries_log_id() {
        let request = RequestEnvelope::new("r-4", "advise", "p1").unwrap();
        let response = clinical().handle(request).await;

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["result"]["patient"], "Ada");
        assert_eq!(value["result"]["advice"]["flu"], "No guideline found.");
        assert_eq!(value["result"]["log_id"], "log-1");
    }

    #[tokio::test]
    async fn test_timeout_becomes_error_payload() {
        let store = FixtureStore {
            delay: Some(Duration::from_millis(500)),
            ..Default::default()
        };
        let request = RequestEnvelope::new("r-5", "summary", "u1").unwrap();
        let response = financial(store).handle(request).await;

        assert_eq!(response.request_id, "r-5");
        let error = response.result.error().unwrap();
        assert!(error.starts_with("Timed out waiting for"), "{error}");
    }

    #[tokio::test]
    async fn test_collaborator_failure_becomes_error_payload() {
        let store = FixtureStore {
            fail_balances: true,
            ..Default::default()
        };
        let request = RequestEnvelope::new("r-6", "summary", "u1").unwrap();
        let response = financial(store).handle(request).await;

        assert_eq!(
            response.result.error(),
            Some("Lookup failed: bank offline")
        );
    }
}
