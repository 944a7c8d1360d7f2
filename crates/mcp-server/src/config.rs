//! Server configuration
//!
//! Read from the process environment (after `.env` is loaded by dotenvy).

use std::time::Duration;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 2000;
const DEFAULT_BANK_LATENCY_MS: u64 = 100;
const DEFAULT_EHR_LATENCY_MS: u64 = 0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on any single collaborator lookup
    pub lookup_timeout: Duration,
    /// Simulated latency of the bank and brokerage collaborators
    pub bank_latency: Duration,
    /// Simulated latency of the EHR collaborators
    pub ehr_latency: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            lookup_timeout: Duration::from_millis(DEFAULT_LOOKUP_TIMEOUT_MS),
            bank_latency: Duration::from_millis(DEFAULT_BANK_LATENCY_MS),
            ehr_latency: Duration::from_millis(DEFAULT_EHR_LATENCY_MS),
        }
    }
}

impl ServerConfig {
    /// Load from environment variables, falling back to defaults
    ///
    /// - `MCP_HOST`, `MCP_PORT`
    /// - `MCP_LOOKUP_TIMEOUT_MS`
    /// - `MCP_BANK_LATENCY_MS`, `MCP_EHR_LATENCY_MS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("MCP_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = parse_or(&lookup, "MCP_PORT", defaults.port)?;
        let lookup_timeout = millis_or(&lookup, "MCP_LOOKUP_TIMEOUT_MS", defaults.lookup_timeout)?;
        let bank_latency = millis_or(&lookup, "MCP_BANK_LATENCY_MS", defaults.bank_latency)?;
        let ehr_latency = millis_or(&lookup, "MCP_EHR_LATENCY_MS", defaults.ehr_latency)?;

        if lookup_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "MCP_LOOKUP_TIMEOUT_MS",
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            lookup_timeout,
            bank_latency,
            ehr_latency,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn millis_or<F>(lookup: &F, key: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    parse_or(lookup, key, default_ms).map(Duration::from_millis)
}
