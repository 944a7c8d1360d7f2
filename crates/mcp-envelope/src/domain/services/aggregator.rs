//! Aggregator - Composition of independent collaborator lookups

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::DomainError;

/// Per-lookup timeout used unless overridden
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Gathers the results of one or more lookups for a subject into a single payload.
///
/// Implementations must not spawn: all lookups run inside the caller's future,
/// so dropping that future cancels every lookup still in flight.
#[async_trait]
pub trait Aggregator: Send + Sync {
    type Output: Serialize + Send;

    /// Short name used in log output
    fn name(&self) -> &'static str;

    async fn aggregate(&self, subject_id: &str) -> Result<Self::Output, DomainError>;
}

/// Run a single lookup, failing with [`DomainError::Timeout`] once `limit` elapses.
pub async fn bounded<T, F>(lookup: &str, limit: Duration, fut: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(lookup, ?limit, "Lookup timed out");
            Err(DomainError::timeout(lookup, limit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_passes_through_result() {
        let value = bounded("answer", Duration::from_millis(100), async { Ok(42) })
            .await
            .unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_bounded_passes_through_error() {
        let err = bounded::<(), _>("broken", Duration::from_millis(100), async {
            Err(DomainError::Repository("down".to_string()))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));
    }

    #[tokio::test]
    async fn test_bounded_times_out_pending_lookup() {
        let err = bounded::<(), _>(
            "stalled",
            Duration::from_millis(10),
            std::future::pending(),
        )
        .await
        .unwrap_err();

        match err {
            DomainError::Timeout { lookup, elapsed } => {
                assert_eq!(lookup, "stalled");
                assert_eq!(elapsed, Duration::from_millis(10));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
