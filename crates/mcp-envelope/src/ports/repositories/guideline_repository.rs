//! Guideline Repository Port

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Repository interface for medical guidelines
#[async_trait]
pub trait GuidelineRepository: Send + Sync {
    /// Find the guideline text for a condition
    async fn find_guideline(&self, condition: &str) -> Result<Option<String>, DomainError>;
}
