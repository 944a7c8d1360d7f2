use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod config;
mod models;
mod routes;

use adapters::{
    InMemoryBank, InMemoryGuidelines, InMemoryPatients, InMemoryPortfolios, UuidLogIdGenerator,
};
use config::ServerConfig;
use mcp_envelope::{ClinicalAggregator, EnvelopeHandler, FinancialAggregator};

/// Type aliases for aggregators with concrete collaborator implementations
pub type AppFinancialAggregator =
    FinancialAggregator<InMemoryBank, InMemoryPortfolios, UuidLogIdGenerator>;
pub type AppClinicalAggregator =
    ClinicalAggregator<InMemoryPatients, InMemoryGuidelines, UuidLogIdGenerator>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub financial: EnvelopeHandler<AppFinancialAggregator>,
    pub clinical: EnvelopeHandler<AppClinicalAggregator>,
}

impl AppState {
    /// Wire both envelope handlers to the seeded demo collaborators
    pub fn new(config: &ServerConfig) -> Self {
        let log_ids = Arc::new(UuidLogIdGenerator);

        let financial = FinancialAggregator::new(
            Arc::new(InMemoryBank::seeded(config.bank_latency)),
            Arc::new(InMemoryPortfolios::seeded(config.bank_latency)),
            log_ids.clone(),
        )
        .with_lookup_timeout(config.lookup_timeout);

        let clinical = ClinicalAggregator::new(
            Arc::new(InMemoryPatients::seeded(config.ehr_latency)),
            Arc::new(InMemoryGuidelines::seeded(config.ehr_latency)),
            log_ids,
        )
        .with_lookup_timeout(config.lookup_timeout);

        Self {
            financial: EnvelopeHandler::new(Arc::new(financial)),
            clinical: EnvelopeHandler::new(Arc::new(clinical)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "MCP API is running - envelopes in, envelopes out".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with shared state
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::financial::router())
        .merge(routes::clinical::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("⚠️  Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("👋 Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    tracing::info!("📨 MCP API initializing...");

    let config = ServerConfig::from_env().context("Failed to load server configuration")?;
    tracing::info!(
        "⏱️  Lookup timeout {:?}, simulated latency bank={:?} ehr={:?}",
        config.lookup_timeout,
        config.bank_latency,
        config.ehr_latency
    );

    let router = build_router(AppState::new(&config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ MCP API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
