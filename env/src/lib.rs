//! Abstract runtime capabilities for the meander core.
//!
//! The mock latency simulation, wall clock, randomness, and event emission
//! are all pluggable strategies behind traits, so a real custodial backend
//! can be substituted without touching the orchestration state machine.
//! System-backed implementations live here; deterministic test doubles live
//! in `meander-nullables`.

pub mod clock;
pub mod delay;
pub mod entropy;
pub mod sink;

pub use clock::{Clock, SystemClock};
pub use delay::{DelayProvider, TokioDelay};
pub use entropy::{EntropySource, SeededEntropy, SystemEntropy};
pub use sink::{EventSink, FanoutSink, NullSink, TracingSink};

use std::sync::Arc;

/// The capability bundle handed to mints, pools, and the orchestrator.
#[derive(Clone)]
pub struct Env {
    pub clock: Arc<dyn Clock>,
    pub delay: Arc<dyn DelayProvider>,
    pub entropy: Arc<dyn EntropySource>,
    pub sink: Arc<dyn EventSink>,
}

impl Env {
    /// System defaults: wall clock, tokio sleep, OS-seeded entropy,
    /// tracing-formatted events.
    pub fn system() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            delay: Arc::new(TokioDelay),
            entropy: Arc::new(SystemEntropy),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_delay(mut self, delay: Arc<dyn DelayProvider>) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_entropy(mut self, entropy: Arc<dyn EntropySource>) -> Self {
        self.entropy = entropy;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }
}
