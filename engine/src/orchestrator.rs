//! The transmigration orchestrator — the hop-loop state machine.

use crate::config::RunConfig;
use crate::error::EngineError;
use crate::hop::{HopRecord, RunOutcome, RunTrail, TokenSnapshot};
use meander_env::{Clock, Env, EventSink};
use meander_mint::Mint;
use meander_pool::VendorPool;
use meander_types::{Amount, AuditEvent, EventCategory, MintId};
use std::fmt;

/// Lifecycle of a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Initializing,
    Seeding,
    Hopping(u32),
    Completed,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializing => write!(f, "initializing"),
            Self::Seeding => write!(f, "seeding"),
            Self::Hopping(n) => write!(f, "hopping({n})"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Drives the hop loop over a vendor pool.
///
/// Hops are strictly sequential — hop n+1 consumes the token hop n
/// produced — so a run has exactly one in-flight mint operation at any
/// time. A run owns its trail exclusively; concurrent runs need separate
/// orchestrators but may share one pool.
pub struct Orchestrator {
    config: RunConfig,
    pool: VendorPool,
    env: Env,
    state: RunState,
}

impl Orchestrator {
    /// Validate the configuration and build a fresh simulated pool.
    pub fn new(config: RunConfig, env: Env) -> Result<Self, EngineError> {
        config.validate()?;
        let pool = VendorPool::initialize(config.pool_size, config.latency(), &env)?;
        Ok(Self {
            config,
            pool,
            env,
            state: RunState::Initializing,
        })
    }

    /// Validate the configuration and drive an existing pool.
    pub fn with_pool(config: RunConfig, pool: VendorPool, env: Env) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            pool,
            env,
            state: RunState::Initializing,
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn pool(&self) -> &VendorPool {
        &self.pool
    }

    /// Execute the full transmigration cycle.
    ///
    /// On error the run is abandoned whole: the orchestrator moves to
    /// [`RunState::Failed`] and no trail is returned.
    pub async fn run(&mut self) -> Result<RunOutcome, EngineError> {
        match self.run_inner().await {
            Ok(outcome) => {
                self.state = RunState::Completed;
                Ok(outcome)
            }
            Err(err) => {
                self.state = RunState::Failed;
                Err(err)
            }
        }
    }

    async fn run_inner(&mut self) -> Result<RunOutcome, EngineError> {
        let num_hops = self.config.num_hops;
        let amount = Amount::new(self.config.source_amount);

        self.state = RunState::Seeding;
        tracing::info!(
            hops = num_hops,
            pool = self.pool.len(),
            amount = amount.raw(),
            "starting transmigration"
        );

        let seed_mint = self.pool.select_excluding(&[])?;
        let seed = seed_mint.mint(amount, &self.config.source_tag).await?;
        tracing::info!(
            mint = seed_mint.display_name(),
            token = %seed.id.short(),
            "seed token minted"
        );

        let mut current = seed.clone();
        let mut last_mint: MintId = seed.issuing_mint;
        let mut hops: Vec<HopRecord> = Vec::with_capacity(num_hops as usize);

        for hop_number in 1..=num_hops {
            self.state = RunState::Hopping(hop_number);
            let started_at = self.env.clock.now();

            // Exclude only the immediately preceding custodian.
            let destination = self.pool.select_excluding(&[last_mint])?;
            self.env.sink.record(
                &AuditEvent::new(EventCategory::HopStart, started_at)
                    .with_mint(destination.id())
                    .with_token(current.id)
                    .with_amount(current.amount),
            );

            let redeemed = destination.redeem(&current).await?;
            let fresh = destination
                .mint(redeemed, &format!("hop-{hop_number}"))
                .await?;

            let completed_at = self.env.clock.now();
            self.env.sink.record(
                &AuditEvent::new(EventCategory::HopComplete, completed_at)
                    .with_mint(destination.id())
                    .with_token(fresh.id)
                    .with_amount(fresh.amount),
            );

            hops.push(HopRecord {
                hop_number,
                source_mint: last_mint,
                destination_mint: destination.id(),
                token_before: TokenSnapshot::from(&current),
                token_after: TokenSnapshot::from(&fresh),
                started_at,
                completed_at,
            });

            tracing::debug!(
                hop = hop_number,
                of = num_hops,
                mint = destination.display_name(),
                token = %fresh.id.short(),
                "hop complete"
            );

            last_mint = destination.id();
            current = fresh;
        }

        self.env.sink.record(
            &AuditEvent::new(EventCategory::CustodyChainSevered, self.env.clock.now())
                .with_mint(last_mint)
                .with_token(current.id)
                .with_amount(current.amount),
        );
        tracing::info!(
            hops = hops.len(),
            token = %current.id.short(),
            "custody chain severed"
        );

        Ok(RunOutcome {
            trail: RunTrail {
                seed,
                final_token: current,
                hops,
            },
            mint_stats: self.pool.stats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meander_env::SeededEntropy;
    use meander_nullables::{NullClock, NullDelay, RecordingSink};
    use std::sync::Arc;

    fn test_env(seed: u64) -> Env {
        Env {
            clock: Arc::new(NullClock::new(0)),
            delay: Arc::new(NullDelay::new()),
            entropy: Arc::new(SeededEntropy::new(seed)),
            sink: Arc::new(RecordingSink::new()),
        }
    }

    #[tokio::test]
    async fn completed_run_ends_in_completed_state() {
        let mut config = RunConfig::default();
        config.pool_size = 3;
        config.num_hops = 2;
        let mut orchestrator = Orchestrator::new(config, test_env(1)).unwrap();
        assert_eq!(orchestrator.state(), RunState::Initializing);

        orchestrator.run().await.unwrap();
        assert_eq!(orchestrator.state(), RunState::Completed);
    }

    #[tokio::test]
    async fn exhausted_selection_ends_in_failed_state() {
        let mut config = RunConfig::default();
        config.pool_size = 1;
        let mut orchestrator = Orchestrator::new(config, test_env(2)).unwrap();

        let err = orchestrator.run().await.unwrap_err();
        assert!(matches!(err, EngineError::Configuration { .. }));
        assert_eq!(orchestrator.state(), RunState::Failed);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut config = RunConfig::default();
        config.num_hops = 0;
        assert!(Orchestrator::new(config, test_env(3)).is_err());
    }

    #[test]
    fn run_state_display() {
        assert_eq!(RunState::Hopping(3).to_string(), "hopping(3)");
        assert_eq!(RunState::Completed.to_string(), "completed");
    }
}
