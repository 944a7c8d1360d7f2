//! Clinical Advice Route

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use mcp_envelope::RequestEnvelope;

use super::reject;
use crate::models::{ClinicalAdviceRequest, McpResponse};
use crate::AppState;

/// Look up guidelines for each of a patient's conditions
///
/// An unknown patient still answers 200, with `result = {"error": "Patient not found."}`.
#[utoipa::path(
    post,
    path = "/mcp/clinical-advice",
    request_body = ClinicalAdviceRequest,
    responses(
        (status = 200, description = "Clinical advice envelope (or payload-level error)", body = McpResponse),
        (status = 422, description = "Empty request_id or patient_id"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Clinical"
)]
pub async fn clinical_advice(
    State(state): State<AppState>,
    Json(payload): Json<ClinicalAdviceRequest>,
) -> Result<Json<McpResponse>, (StatusCode, String)> {
    let request = RequestEnvelope::try_from(payload).map_err(reject)?;
    let response = state.clinical.handle(request).await;

    let body = McpResponse::from_envelope(response)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/mcp/clinical-advice", post(clinical_advice))
}
