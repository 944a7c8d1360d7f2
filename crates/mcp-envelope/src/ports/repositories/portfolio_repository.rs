//! Portfolio Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Portfolio};

/// Repository interface for investment portfolios
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Find the portfolio held by a user
    async fn find_portfolio(&self, user_id: &str) -> Result<Option<Portfolio>, DomainError>;
}
