//! Envelope - Correlation-id request/response wrapper
//!
//! A request carries a caller-supplied correlation token alongside the
//! subject it is about. The response echoes that token verbatim and carries
//! either the aggregated payload or an `{"error": ...}` mapping.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Incoming envelope, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    request_id: String,
    action: String,
    subject_id: String,
}

impl RequestEnvelope {
    /// Build an envelope. `request_id` and `subject_id` must be non-empty; any other
    /// string, whitespace included, is kept verbatim.
    pub fn new(
        request_id: impl Into<String>,
        action: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let request_id = request_id.into();
        let subject_id = subject_id.into();

        if request_id.is_empty() {
            return Err(DomainError::Validation(
                "request_id must not be empty".to_string(),
            ));
        }
        if subject_id.is_empty() {
            return Err(DomainError::Validation(
                "subject id must not be empty".to_string(),
            ));
        }

        Ok(Self {
            request_id,
            action: action.into(),
            subject_id,
        })
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Descriptive only; never dispatched on.
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }
}

/// Payload-level error indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl From<&DomainError> for ErrorPayload {
    fn from(err: &DomainError) -> Self {
        Self {
            error: err.payload_message(),
        }
    }
}

/// Result slot of a response envelope.
///
/// Serialized untagged: the wire shape is either the payload mapping itself
/// or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnvelopeResult<T> {
    Success(T),
    Failure(ErrorPayload),
}

impl<T> EnvelopeResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(payload) => Some(&payload.error),
        }
    }
}

/// Outgoing envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope<T> {
    pub request_id: String,
    pub result: EnvelopeResult<T>,
}

impl<T> ResponseEnvelope<T> {
    pub fn success(request_id: impl Into<String>, payload: T) -> Self {
        Self {
            request_id: request_id.into(),
            result: EnvelopeResult::Success(payload),
        }
    }

    pub fn failure(request_id: impl Into<String>, err: &DomainError) -> Self {
        Self {
            request_id: request_id.into(),
            result: EnvelopeResult::Failure(err.into()),
        }
    }
}
