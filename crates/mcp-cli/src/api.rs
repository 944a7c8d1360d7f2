//! MCP API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for the MCP demo server
pub struct McpClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct FinancialSummaryRequest {
    pub request_id: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClinicalAdviceRequest {
    pub request_id: String,
    pub action: String,
    pub patient_id: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct McpResponse {
    pub request_id: String,
    pub result: serde_json::Value,
}

impl McpResponse {
    /// Payload-level error message, if the server reported one
    pub fn error(&self) -> Option<&str> {
        self.result.get("error").and_then(|e| e.as_str())
    }
}

/// Caller-supplied id, or a fresh UUID v4
pub fn request_id_or_new(request_id: Option<String>) -> String {
    request_id.unwrap_or_else(|| Uuid::new_v4().to_string())
}

impl McpClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// POST /mcp/financial-summary
    pub async fn financial_summary(&self, req: &FinancialSummaryRequest) -> Result<McpResponse> {
        self.post_envelope("/mcp/financial-summary", req).await
    }

    /// POST /mcp/clinical-advice
    pub async fn clinical_advice(&self, req: &ClinicalAdviceRequest) -> Result<McpResponse> {
        self.post_envelope("/mcp/clinical-advice", req).await
    }

    async fn post_envelope<T: Serialize>(&self, path: &str, body: &T) -> Result<McpResponse> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, text);
        }

        resp.json().await.context("Failed to parse response envelope")
    }
}
