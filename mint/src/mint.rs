//! The mint service trait and its simulated implementation.

use crate::error::MintError;
use crate::token::BearerToken;
use async_trait::async_trait;
use meander_env::{Clock, DelayProvider, EntropySource, Env, EventSink};
use meander_types::{Amount, AuditEvent, EventCategory, MintId};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Simulated service latency interval in milliseconds, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Draw a uniform duration from the range.
    fn sample(&self, entropy: &dyn EntropySource) -> Duration {
        let span = self.max_ms.saturating_sub(self.min_ms) as usize + 1;
        let offset = entropy.pick_index(span) as u64;
        Duration::from_millis(self.min_ms + offset)
    }
}

impl Default for LatencyRange {
    fn default() -> Self {
        Self {
            min_ms: 30,
            max_ms: 150,
        }
    }
}

/// Read-only snapshot of a mint's operation counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintStats {
    pub mint_id: MintId,
    pub display_name: String,
    pub minted_count: u64,
    pub redeemed_count: u64,
    pub total_value_minted: u64,
    pub total_value_redeemed: u64,
}

/// A custodial mint service.
///
/// The seam where a real backend replaces the simulation: implementations
/// issue fresh bearer tokens and redeem previously issued ones. All
/// operations on one run are awaited sequentially by the engine.
#[async_trait]
pub trait Mint: Send + Sync {
    /// Stable identity assigned at construction, distinct within a pool.
    fn id(&self) -> MintId;

    /// Human-facing label. Never used for selection logic.
    fn display_name(&self) -> &str;

    /// Issue a fresh token for `amount`, tagged with a caller-supplied
    /// provenance label.
    async fn mint(&self, amount: Amount, provenance: &str) -> Result<BearerToken, MintError>;

    /// Redeem a token back into spendable amount.
    async fn redeem(&self, token: &BearerToken) -> Result<Amount, MintError>;

    /// Statistics snapshot. Idempotent, no side effects.
    fn stats(&self) -> MintStats;
}

// Counters are atomics rather than single-writer state: independent
// concurrent runs may share one pool, and each counter is local to its mint.
#[derive(Default)]
struct MintCounters {
    minted: AtomicU64,
    redeemed: AtomicU64,
    value_minted: AtomicU64,
    value_redeemed: AtomicU64,
}

/// Simulated custodial mint.
///
/// Mimics a real eCash mint without network connections or real value:
/// every operation sleeps a uniform draw from the configured latency range,
/// updates counters, and emits a structured event to the configured sink.
pub struct MockMint {
    id: MintId,
    display_name: String,
    latency: LatencyRange,
    counters: MintCounters,
    clock: Arc<dyn Clock>,
    delay: Arc<dyn DelayProvider>,
    entropy: Arc<dyn EntropySource>,
    sink: Arc<dyn EventSink>,
}

impl MockMint {
    /// Create a mint with a freshly drawn identity and emit `MINT_INIT`.
    pub fn new(display_name: impl Into<String>, latency: LatencyRange, env: &Env) -> Self {
        let mut id_bytes = [0u8; 32];
        env.entropy.fill_bytes(&mut id_bytes);
        let id = MintId::new(id_bytes);

        let mint = Self {
            id,
            display_name: display_name.into(),
            latency,
            counters: MintCounters::default(),
            clock: env.clock.clone(),
            delay: env.delay.clone(),
            entropy: env.entropy.clone(),
            sink: env.sink.clone(),
        };

        mint.sink.record(
            &AuditEvent::new(EventCategory::MintInit, mint.clock.now()).with_mint(mint.id),
        );
        mint
    }

    async fn simulate_latency(&self) {
        let duration = self.latency.sample(self.entropy.as_ref());
        self.delay.sleep(duration).await;
    }
}

#[async_trait]
impl Mint for MockMint {
    fn id(&self) -> MintId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    async fn mint(&self, amount: Amount, provenance: &str) -> Result<BearerToken, MintError> {
        self.simulate_latency().await;

        let mut payload = [0u8; 32];
        self.entropy.fill_bytes(&mut payload);
        let token = BearerToken::issue(self.id, amount, payload, self.clock.now());

        self.counters.minted.fetch_add(1, Ordering::Relaxed);
        self.counters
            .value_minted
            .fetch_add(amount.raw(), Ordering::Relaxed);

        self.sink.record(
            &AuditEvent::new(EventCategory::MintTokens, token.created_at)
                .with_mint(self.id)
                .with_token(token.id)
                .with_amount(amount)
                .with_provenance(provenance),
        );

        Ok(token)
    }

    async fn redeem(&self, token: &BearerToken) -> Result<Amount, MintError> {
        self.simulate_latency().await;

        // Mock semantics: any token from any mint is accepted. A real
        // backend must reject invalid or already-spent proofs here.
        self.counters.redeemed.fetch_add(1, Ordering::Relaxed);
        self.counters
            .value_redeemed
            .fetch_add(token.amount.raw(), Ordering::Relaxed);

        self.sink.record(
            &AuditEvent::new(EventCategory::RedeemToken, self.clock.now())
                .with_mint(self.id)
                .with_token(token.id)
                .with_amount(token.amount),
        );

        Ok(token.amount)
    }

    fn stats(&self) -> MintStats {
        MintStats {
            mint_id: self.id,
            display_name: self.display_name.clone(),
            minted_count: self.counters.minted.load(Ordering::Relaxed),
            redeemed_count: self.counters.redeemed.load(Ordering::Relaxed),
            total_value_minted: self.counters.value_minted.load(Ordering::Relaxed),
            total_value_redeemed: self.counters.value_redeemed.load(Ordering::Relaxed),
        }
    }
}
