//! In-memory collaborators seeded with demo data
//!
//! Stand-ins for the bank, brokerage, and EHR services. Each waits out a
//! configurable latency before answering.

mod bank;
mod ehr;
mod portfolio;

pub use bank::InMemoryBank;
pub use ehr::{InMemoryGuidelines, InMemoryPatients};
pub use portfolio::InMemoryPortfolios;

use std::time::Duration;

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
