//! Service Ports
//!
//! Abstract interfaces for external services.

mod log_id;

pub use log_id::*;
