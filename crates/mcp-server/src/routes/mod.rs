//! MCP API Routes
//!
//! - /mcp/financial-summary - Balances, transactions, portfolio
//! - /mcp/clinical-advice - Patient guidelines per condition

pub mod clinical;
pub mod financial;
pub mod swagger;

use axum::http::StatusCode;

use mcp_envelope::DomainError;

/// Map a rejected request to a transport-level error.
pub(crate) fn reject(err: DomainError) -> (StatusCode, String) {
    match err {
        DomainError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::{build_router, AppState};

    /// Router over the seeded demo data with no simulated latency
    pub fn router() -> Router {
        let config = ServerConfig {
            bank_latency: std::time::Duration::ZERO,
            ..ServerConfig::default()
        };
        build_router(AppState::new(&config))
    }

    pub async fn post_json(
        router: Router,
        path: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::post(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }
}
