//! In-memory brokerage

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use async_trait::async_trait;

use mcp_envelope::{DomainError, Holding, Portfolio, PortfolioRepository};

use super::simulate_latency;

/// In-memory implementation of PortfolioRepository
pub struct InMemoryPortfolios {
    portfolios: HashMap<String, Portfolio>,
    latency: Duration,
}

impl InMemoryPortfolios {
    pub fn new(latency: Duration) -> Self {
        Self {
            portfolios: HashMap::new(),
            latency,
        }
    }

    /// Brokerage holding the demo user `user_001`
    pub fn seeded(latency: Duration) -> Self {
        Self::new(latency).with_portfolio(
            "user_001",
            Portfolio {
                stocks: BTreeMap::from([
                    ("AAPL".to_string(), Holding::new(50, 180.0)),
                    ("TSLA".to_string(), Holding::new(20, 650.0)),
                ]),
                bonds: 10_000.0,
            },
        )
    }

    pub fn with_portfolio(mut self, user_id: impl Into<String>, portfolio: Portfolio) -> Self {
        self.portfolios.insert(user_id.into(), portfolio);
        self
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolios {
    async fn find_portfolio(&self, user_id: &str) -> Result<Option<Portfolio>, DomainError> {
        simulate_latency(self.latency).await;
        Ok(self.portfolios.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_portfolio_total() {
        let brokerage = InMemoryPortfolios::seeded(Duration::ZERO);
        let portfolio = brokerage.find_portfolio("user_001").await.unwrap().unwrap();

        assert_eq!(portfolio.stocks.len(), 2);
        assert_eq!(portfolio.total_value(), 32_000.0);
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let brokerage = InMemoryPortfolios::seeded(Duration::from_millis(30));
        let started = std::time::Instant::now();
        brokerage.find_portfolio("user_001").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
