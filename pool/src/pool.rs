//! Pool construction and mint selection.

use crate::error::PoolError;
use meander_env::{EntropySource, Env};
use meander_mint::{LatencyRange, Mint, MintStats, MockMint};
use meander_types::MintId;
use std::sync::Arc;

/// An ordered collection of mint services with pairwise-distinct ids.
///
/// Size is fixed at construction; mints live for the process duration and
/// are never destroyed mid-run. Cloning a pool shares the underlying
/// mints — and their counters — so independent concurrent runs can draw
/// from the same vendors.
#[derive(Clone)]
pub struct VendorPool {
    mints: Vec<Arc<dyn Mint>>,
    entropy: Arc<dyn EntropySource>,
}

impl VendorPool {
    /// Construct `count` simulated mints sharing one latency configuration.
    ///
    /// Names follow the `Vendor-<letter><cycle>` scheme (Vendor-A1 through
    /// Vendor-Z1, then Vendor-A2, …). The naming exists purely for
    /// observability; selection never looks at it.
    pub fn initialize(count: usize, latency: LatencyRange, env: &Env) -> Result<Self, PoolError> {
        if count == 0 {
            return Err(PoolError::Empty);
        }

        let mut mints: Vec<Arc<dyn Mint>> = Vec::with_capacity(count);
        for i in 0..count {
            let letter = (b'A' + (i % 26) as u8) as char;
            let cycle = i / 26 + 1;
            let mint = MockMint::new(format!("Vendor-{letter}{cycle}"), latency, env);
            tracing::debug!(
                mint = %mint.id().short(),
                name = mint.display_name(),
                "vendor discovered"
            );
            mints.push(Arc::new(mint));
        }

        tracing::info!(count = mints.len(), "vendor pool initialized");
        Ok(Self {
            mints,
            entropy: env.entropy.clone(),
        })
    }

    /// Build a pool from existing mint services (tests, future real
    /// backends discovered elsewhere).
    pub fn from_mints(
        mints: Vec<Arc<dyn Mint>>,
        entropy: Arc<dyn EntropySource>,
    ) -> Result<Self, PoolError> {
        if mints.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { mints, entropy })
    }

    /// One mint chosen uniformly at random from the subset whose id is not
    /// in `exclude`.
    ///
    /// Fails with [`PoolError::Exhausted`] when the exclusion set covers
    /// the whole pool.
    pub fn select_excluding(&self, exclude: &[MintId]) -> Result<Arc<dyn Mint>, PoolError> {
        let eligible: Vec<&Arc<dyn Mint>> = self
            .mints
            .iter()
            .filter(|m| !exclude.contains(&m.id()))
            .collect();

        if eligible.is_empty() {
            return Err(PoolError::Exhausted {
                pool_size: self.mints.len(),
            });
        }

        let idx = self.entropy.pick_index(eligible.len());
        let selected = eligible[idx].clone();
        tracing::debug!(
            mint = %selected.id().short(),
            name = selected.display_name(),
            eligible = eligible.len(),
            "mint selected"
        );
        Ok(selected)
    }

    pub fn len(&self) -> usize {
        self.mints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mints.is_empty()
    }

    pub fn mints(&self) -> &[Arc<dyn Mint>] {
        &self.mints
    }

    /// Statistics snapshots for every mint, in pool order.
    pub fn stats(&self) -> Vec<MintStats> {
        self.mints.iter().map(|m| m.stats()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meander_env::SeededEntropy;
    use meander_nullables::{NullClock, NullDelay, RecordingSink};
    use std::collections::HashSet;

    fn test_env(seed: u64) -> Env {
        Env {
            clock: Arc::new(NullClock::new(0)),
            delay: Arc::new(NullDelay::new()),
            entropy: Arc::new(SeededEntropy::new(seed)),
            sink: Arc::new(RecordingSink::new()),
        }
    }

    #[test]
    fn initialize_creates_distinct_vendors() {
        let env = test_env(1);
        let pool = VendorPool::initialize(30, LatencyRange::default(), &env).unwrap();
        assert_eq!(pool.len(), 30);

        let ids: HashSet<MintId> = pool.mints().iter().map(|m| m.id()).collect();
        assert_eq!(ids.len(), 30, "mint ids must be pairwise distinct");

        assert_eq!(pool.mints()[0].display_name(), "Vendor-A1");
        assert_eq!(pool.mints()[25].display_name(), "Vendor-Z1");
        assert_eq!(pool.mints()[26].display_name(), "Vendor-A2");
    }

    #[test]
    fn zero_size_pool_is_rejected() {
        let env = test_env(2);
        let result = VendorPool::initialize(0, LatencyRange::default(), &env);
        assert!(matches!(result, Err(PoolError::Empty)));

        let result = VendorPool::from_mints(Vec::new(), env.entropy.clone());
        assert!(matches!(result, Err(PoolError::Empty)));
    }

    #[test]
    fn selection_never_returns_an_excluded_mint() {
        let env = test_env(3);
        let pool = VendorPool::initialize(3, LatencyRange::default(), &env).unwrap();
        let excluded = pool.mints()[0].id();

        for _ in 0..200 {
            let selected = pool.select_excluding(&[excluded]).unwrap();
            assert_ne!(selected.id(), excluded);
        }
    }

    #[test]
    fn selection_covers_every_eligible_mint() {
        let env = test_env(4);
        let pool = VendorPool::initialize(5, LatencyRange::default(), &env).unwrap();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(pool.select_excluding(&[]).unwrap().id());
        }
        assert_eq!(seen.len(), 5, "uniform selection should reach every mint");
    }

    #[test]
    fn excluding_the_whole_pool_is_exhaustion() {
        let env = test_env(5);
        let pool = VendorPool::initialize(1, LatencyRange::default(), &env).unwrap();
        let only = pool.mints()[0].id();

        let result = pool.select_excluding(&[only]);
        assert!(matches!(result, Err(PoolError::Exhausted { pool_size: 1 })));
    }
}
