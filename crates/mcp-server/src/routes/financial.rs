//! Financial Summary Route

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use mcp_envelope::RequestEnvelope;

use super::reject;
use crate::models::{FinancialSummaryRequest, McpResponse};
use crate::AppState;

/// Aggregate balances, recent transactions, and portfolio for a user
#[utoipa::path(
    post,
    path = "/mcp/financial-summary",
    request_body = FinancialSummaryRequest,
    responses(
        (status = 200, description = "Financial summary envelope", body = McpResponse),
        (status = 422, description = "Empty request_id or user_id"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Financial"
)]
pub async fn financial_summary(
    State(state): State<AppState>,
    Json(payload): Json<FinancialSummaryRequest>,
) -> Result<Json<McpResponse>, (StatusCode, String)> {
    let request = RequestEnvelope::try_from(payload).map_err(reject)?;
    let response = state.financial.handle(request).await;

    let body = McpResponse::from_envelope(response)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/mcp/financial-summary", post(financial_summary))
}
