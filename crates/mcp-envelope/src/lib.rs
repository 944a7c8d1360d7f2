//! MCP Envelope Library
//!
//! Correlation-id request/response envelope and the aggregators behind the
//! financial-summary and clinical-advice demo endpoints.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Envelope, financial and clinical models
//!   - `services/`: Aggregators and the envelope handler
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Read-only data collaborators
//!   - `services/`: Log id generation
//!
//! # Usage
//!
//! ```rust,ignore
//! use mcp_envelope::{EnvelopeHandler, FinancialAggregator, RequestEnvelope};
//!
//! let handler = EnvelopeHandler::new(Arc::new(aggregator));
//! let response = handler.handle(RequestEnvelope::new("req-1", "summary", "user_001")?).await;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    bounded, Advice, Aggregator, Balances, ClinicalAdvice, ClinicalAggregator, DomainError,
    EnvelopeHandler, EnvelopeResult, ErrorPayload, FinancialAggregator, FinancialResult,
    FinancialSummary, Holding, Patient, Portfolio, PortfolioSummary, RequestEnvelope,
    ResponseEnvelope, Transaction, DEFAULT_LOOKUP_TIMEOUT, DEFAULT_USER_ID, NO_GUIDELINE_FOUND,
};
pub use ports::{
    // Repositories
    BankRepository,
    GuidelineRepository,
    // Services
    LogIdGenerator,
    PatientRepository,
    PortfolioRepository,
};
