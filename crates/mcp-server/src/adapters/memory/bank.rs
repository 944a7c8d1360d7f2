//! In-memory bank: balances and recent transactions

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use mcp_envelope::{Balances, BankRepository, DomainError, Transaction};

use super::simulate_latency;

/// Demo transactions for `user_001`: (ISO date, amount, description)
const SEED_TRANSACTIONS: [(&str, f64, &str); 3] = [
    ("2025-06-01", -120.0, "Groceries"),
    ("2025-06-02", -50.0, "Gas"),
    ("2025-06-03", 1500.0, "Paycheck"),
];

/// In-memory implementation of BankRepository
pub struct InMemoryBank {
    balances: HashMap<String, Balances>,
    transactions: HashMap<String, Vec<Transaction>>,
    latency: Duration,
}

impl InMemoryBank {
    pub fn new(latency: Duration) -> Self {
        Self {
            balances: HashMap::new(),
            transactions: HashMap::new(),
            latency,
        }
    }

    /// Bank holding the demo user `user_001`
    pub fn seeded(latency: Duration) -> Self {
        Self::new(latency)
            .with_balances(
                "user_001",
                Balances::from([
                    ("checking".to_string(), 3250.50),
                    ("savings".to_string(), 15800.75),
                ]),
            )
            .with_transactions("user_001", seed_transactions())
    }

    pub fn with_balances(mut self, user_id: impl Into<String>, balances: Balances) -> Self {
        self.balances.insert(user_id.into(), balances);
        self
    }

    pub fn with_transactions(
        mut self,
        user_id: impl Into<String>,
        transactions: Vec<Transaction>,
    ) -> Self {
        self.transactions.insert(user_id.into(), transactions);
        self
    }
}

fn seed_transactions() -> Vec<Transaction> {
    SEED_TRANSACTIONS
        .iter()
        .filter_map(|(date, amount, description)| match date.parse::<NaiveDate>() {
            Ok(date) => Some(Transaction::new(date, *amount, *description)),
            Err(e) => {
                tracing::error!("Invalid seed transaction date {:?}: {}", date, e);
                None
            }
        })
        .collect()
}

#[async_trait]
impl BankRepository for InMemoryBank {
    async fn find_balances(&self, user_id: &str) -> Result<Option<Balances>, DomainError> {
        simulate_latency(self.latency).await;
        Ok(self.balances.get(user_id).cloned())
    }

    async fn find_transactions(
        &self,
        user_id: &str,
    ) -> Result<Option<Vec<Transaction>>, DomainError> {
        simulate_latency(self.latency).await;
        Ok(self.transactions.get(user_id).cloned())
    }
}
