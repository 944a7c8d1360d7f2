//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ClinicalAdviceRequest, FinancialSummaryRequest, McpResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::financial::financial_summary,
        super::clinical::clinical_advice,
    ),
    info(
        title = "MCP Demo API",
        version = "0.1.0",
        description = "Correlation-id envelope endpoints aggregating financial and clinical demo data.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Financial", description = "Financial summary - balances, transactions, portfolio"),
        (name = "Clinical", description = "Clinical advice - guidelines per patient condition"),
    ),
    components(
        schemas(
            FinancialSummaryRequest,
            ClinicalAdviceRequest,
            McpResponse,
        )
    )
)]
pub struct ApiDoc;
