//! Nullable delay — instant "latency" that records what was requested.

use async_trait::async_trait;
use meander_env::DelayProvider;
use std::sync::Mutex;
use std::time::Duration;

/// A delay provider that returns immediately.
///
/// Requested durations are recorded so tests can assert that operations
/// drew their latency from the configured range without actually waiting.
#[derive(Default)]
pub struct NullDelay {
    requested: Mutex<Vec<Duration>>,
}

impl NullDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every duration that was requested, in order.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

#[async_trait]
impl DelayProvider for NullDelay {
    async fn sleep(&self, duration: Duration) {
        self.requested.lock().unwrap().push(duration);
    }
}
