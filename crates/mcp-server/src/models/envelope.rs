//! Envelope DTOs - JSON bodies of the `/mcp/*` endpoints

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use mcp_envelope::{DomainError, RequestEnvelope, ResponseEnvelope, DEFAULT_USER_ID};

/// Financial summary request
#[derive(Debug, Deserialize, ToSchema)]
pub struct FinancialSummaryRequest {
    pub request_id: String,
    pub action: String,
    /// Defaults to `user_001` when omitted
    #[serde(default)]
    pub user_id: Option<String>,
}

impl TryFrom<FinancialSummaryRequest> for RequestEnvelope {
    type Error = DomainError;

    fn try_from(req: FinancialSummaryRequest) -> Result<Self, Self::Error> {
        let user_id = req.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string());
        RequestEnvelope::new(req.request_id, req.action, user_id)
    }
}

/// Clinical advice request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ClinicalAdviceRequest {
    pub request_id: String,
    pub action: String,
    pub patient_id: String,
}

impl TryFrom<ClinicalAdviceRequest> for RequestEnvelope {
    type Error = DomainError;

    fn try_from(req: ClinicalAdviceRequest) -> Result<Self, Self::Error> {
        RequestEnvelope::new(req.request_id, req.action, req.patient_id)
    }
}

/// Response envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct McpResponse {
    /// Echo of the request's `request_id`
    pub request_id: String,
    /// Aggregated payload, or `{"error": "..."}`
    #[schema(value_type = Object)]
    pub result: serde_json::Value,
}

impl McpResponse {
    pub fn from_envelope<T: Serialize>(
        envelope: ResponseEnvelope<T>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            request_id: envelope.request_id,
            result: serde_json::to_value(envelope.result)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_user_id_resolves_to_default() {
        let req: FinancialSummaryRequest =
            serde_json::from_str(r#"{"request_id": "r1", "action": "summary"}"#).unwrap();
        let envelope = RequestEnvelope::try_from(req).unwrap();
        assert_eq!(envelope.subject_id(), DEFAULT_USER_ID);
    }

    #[test]
    fn test_explicit_user_id_wins() {
        let req: FinancialSummaryRequest = serde_json::from_str(
            r#"{"request_id": "r1", "action": "summary", "user_id": "user_042"}"#,
        )
        .unwrap();
        let envelope = RequestEnvelope::try_from(req).unwrap();
        assert_eq!(envelope.subject_id(), "user_042");
    }

    #[test]
    fn test_empty_patient_id_is_rejected() {
        let req = ClinicalAdviceRequest {
            request_id: "r1".to_string(),
            action: "advise".to_string(),
            patient_id: String::new(),
        };
        assert!(matches!(
            RequestEnvelope::try_from(req),
            Err(DomainError::Validation(_))
        ));
    }
}
