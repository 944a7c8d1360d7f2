//! MCP Wire Models
//!
//! - Envelope: request DTOs per endpoint and the shared response shape

mod envelope;

pub use envelope::*;
