//! In-crate fixtures for aggregator tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Balances, DomainError, Patient, Portfolio, Transaction};
use crate::ports::{
    BankRepository, GuidelineRepository, LogIdGenerator, PatientRepository, PortfolioRepository,
};

/// Yields `log-1`, `log-2`, ...
#[derive(Default)]
pub struct SequentialLogIds {
    next: AtomicUsize,
}

impl LogIdGenerator for SequentialLogIds {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("log-{n}")
    }
}

/// Answers from fixed maps, optionally after a delay
#[derive(Default)]
pub struct FixtureStore {
    pub balances: HashMap<String, Balances>,
    pub transactions: HashMap<String, Vec<Transaction>>,
    pub portfolios: HashMap<String, Portfolio>,
    pub patients: HashMap<String, Patient>,
    pub guidelines: HashMap<String, String>,
    pub delay: Option<Duration>,
    pub stall_guidelines: bool,
    pub fail_balances: bool,
}

impl FixtureStore {
    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl BankRepository for FixtureStore {
    async fn find_balances(&self, user_id: &str) -> Result<Option<Balances>, DomainError> {
        self.pause().await;
        if self.fail_balances {
            return Err(DomainError::Repository("bank offline".to_string()));
        }
        Ok(self.balances.get(user_id).cloned())
    }

    async fn find_transactions(
        &self,
        user_id: &str,
    ) -> Result<Option<Vec<Transaction>>, DomainError> {
        self.pause().await;
        Ok(self.transactions.get(user_id).cloned())
    }
}

#[async_trait]
impl PortfolioRepository for FixtureStore {
    async fn find_portfolio(&self, user_id: &str) -> Result<Option<Portfolio>, DomainError> {
        self.pause().await;
        Ok(self.portfolios.get(user_id).cloned())
    }
}

#[async_trait]
impl PatientRepository for FixtureStore {
    async fn find_by_id(&self, patient_id: &str) -> Result<Option<Patient>, DomainError> {
        Ok(self.patients.get(patient_id).cloned())
    }
}

#[async_trait]
impl GuidelineRepository for FixtureStore {
    async fn find_guideline(&self, condition: &str) -> Result<Option<String>, DomainError> {
        if self.stall_guidelines {
            std::future::pending::<()>().await;
        }
        self.pause().await;
        Ok(self.guidelines.get(condition).cloned())
    }
}
