//! Delay capability — the suspension point behind simulated latency.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the calling task for a duration.
///
/// Every mint operation awaits one of these; a real backend would replace
/// the sleep with an actual network round trip.
#[async_trait]
pub trait DelayProvider: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real elapsed-time delays via the tokio timer.
pub struct TokioDelay;

#[async_trait]
impl DelayProvider for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
