//! Domain Services
//!
//! - Aggregator: fan out independent lookups, merge into one payload
//! - EnvelopeHandler: wrap an aggregator behind the correlation-id protocol

mod aggregator;
mod clinical;
mod envelope_handler;
mod financial;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregator::*;
pub use clinical::*;
pub use envelope_handler::*;
pub use financial::*;
