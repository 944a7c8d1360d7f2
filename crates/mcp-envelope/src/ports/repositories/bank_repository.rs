//! Bank Repository Port
//!
//! Abstract interface for account balance and transaction lookups.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Balances, Transaction};

/// Repository interface for bank account data
#[async_trait]
pub trait BankRepository: Send + Sync {
    /// Find account balances for a user
    async fn find_balances(&self, user_id: &str) -> Result<Option<Balances>, DomainError>;

    /// Find recent transactions for a user, most recent last
    async fn find_transactions(
        &self,
        user_id: &str,
    ) -> Result<Option<Vec<Transaction>>, DomainError>;
}
