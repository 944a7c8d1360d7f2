//! Domain Entities
//!
//! - Envelope: correlation-id request/response wrapper
//! - Financial: balances, transactions, portfolio
//! - Clinical: patient record, condition advice

mod clinical;
mod envelope;
mod financial;

pub use clinical::*;
pub use envelope::*;
pub use financial::*;
