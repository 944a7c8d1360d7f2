//! Financial Aggregator
//!
//! Balances, recent transactions, and the investment portfolio for a user,
//! fetched concurrently and merged into one summary.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::aggregator::{bounded, Aggregator, DEFAULT_LOOKUP_TIMEOUT};
use crate::domain::{DomainError, FinancialResult, FinancialSummary};
use crate::ports::{BankRepository, LogIdGenerator, PortfolioRepository};

/// Aggregator behind `POST /mcp/financial-summary`
pub struct FinancialAggregator<B, P, G>
where
    B: BankRepository,
    P: PortfolioRepository,
    G: LogIdGenerator,
{
    bank: Arc<B>,
    portfolios: Arc<P>,
    log_ids: Arc<G>,
    lookup_timeout: Duration,
}

impl<B, P, G> FinancialAggregator<B, P, G>
where
    B: BankRepository,
    P: PortfolioRepository,
    G: LogIdGenerator,
{
    pub fn new(bank: Arc<B>, portfolios: Arc<P>, log_ids: Arc<G>) -> Self {
        Self {
            bank,
            portfolios,
            log_ids,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }
}

#[async_trait]
impl<B, P, G> Aggregator for FinancialAggregator<B, P, G>
where
    B: BankRepository,
    P: PortfolioRepository,
    G: LogIdGenerator,
{
    type Output = FinancialResult;

    fn name(&self) -> &'static str {
        "financial-summary"
    }

    /// Unknown users resolve to empty data, never to an error.
    async fn aggregate(&self, user_id: &str) -> Result<FinancialResult, DomainError> {
        let limit = self.lookup_timeout;

        let (balances, transactions, portfolio) = tokio::try_join!(
            bounded("account balances", limit, self.bank.find_balances(user_id)),
            bounded(
                "recent transactions",
                limit,
                self.bank.find_transactions(user_id)
            ),
            bounded(
                "investment portfolio",
                limit,
                self.portfolios.find_portfolio(user_id)
            ),
        )?;

        tracing::debug!(
            user_id,
            has_balances = balances.is_some(),
            has_transactions = transactions.is_some(),
            has_portfolio = portfolio.is_some(),
            "Financial lookups resolved"
        );

        let summary = FinancialSummary {
            balances: balances.unwrap_or_default(),
            recent_transactions: transactions.unwrap_or_default(),
            investment_portfolio: portfolio.unwrap_or_default().summarize(),
        };

        Ok(FinancialResult {
            summary,
            log_id: self.log_ids.generate(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::testing::{FixtureStore, SequentialLogIds};
    use crate::domain::{Holding, Portfolio, Transaction};
    use chrono::NaiveDate;
    use std::collections::{BTreeMap, HashMap};

    fn store() -> FixtureStore {
        FixtureStore {
            balances: HashMap::from([(
                "u1".to_string(),
                BTreeMap::from([("checking".to_string(), 100.0), ("savings".to_string(), 50.5)]),
            )]),
            transactions: HashMap::from([(
                "u1".to_string(),
                vec![Transaction::new(
                    NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                    -9.5,
                    "Coffee",
                )],
            )]),
            portfolios: HashMap::from([(
                "u1".to_string(),
                Portfolio {
                    stocks: BTreeMap::from([
                        ("AAA".to_string(), Holding::new(3, 10.0)),
                        ("BBB".to_string(), Holding::new(2, 2.5)),
                    ]),
                    bonds: 100.0,
                },
            )]),
            ..Default::default()
        }
    }

    fn aggregator(
        store: FixtureStore,
    ) -> FinancialAggregator<FixtureStore, FixtureStore, SequentialLogIds> {
        let store = Arc::new(store);
        FinancialAggregator::new(store.clone(), store, Arc::new(SequentialLogIds::default()))
    }

    #[tokio::test]
    async fn test_merges_all_three_lookups() {
        let result = aggregator(store()).aggregate("u1").await.unwrap();

        assert_eq!(result.summary.balances["checking"], 100.0);
        assert_eq!(result.summary.recent_transactions.len(), 1);
        assert_eq!(result.summary.investment_portfolio.total_value, 135.0);
        assert_eq!(result.log_id, "log-1");
    }

    #[tokio::test]
    async fn test_unknown_user_yields_empty_summary() {
        let result = aggregator(store()).aggregate("nobody").await.unwrap();

        assert!(result.summary.balances.is_empty());
        assert!(result.summary.recent_transactions.is_empty());
        assert!(result.summary.investment_portfolio.stocks.is_empty());
        assert_eq!(result.summary.investment_portfolio.total_value, 0.0);
        assert!(!result.log_id.is_empty());
    }

    #[tokio::test]
    async fn test_each_call_gets_a_fresh_log_id() {
        let aggregator = aggregator(store());
        let first = aggregator.aggregate("u1").await.unwrap();
        let second = aggregator.aggregate("u1").await.unwrap();
        assert_ne!(first.log_id, second.log_id);
    }

    #[tokio::test]
    async fn test_lookups_run_concurrently() {
        let mut slow = store();
        slow.delay = Some(Duration::from_millis(150));
        let aggregator = aggregator(slow).with_lookup_timeout(Duration::from_millis(300));

        // Run one after another these would take ~450ms.
        let started = std::time::Instant::now();
        aggregator.aggregate("u1").await.unwrap();
        assert!(started.elapsed() < Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_slow_lookup_times_out() {
        let mut slow = store();
        slow.delay = Some(Duration::from_millis(500));
        let aggregator = aggregator(slow).with_lookup_timeout(Duration::from_millis(20));

        let err = aggregator.aggregate("u1").await.unwrap_err();
        assert!(matches!(err, DomainError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_collaborator_failure_propagates() {
        let mut broken = store();
        broken.fail_balances = true;

        let err = aggregator(broken).aggregate("u1").await.unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));
    }
}
