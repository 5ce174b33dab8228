//! Integration tests exercising the full transmigration cycle:
//! vendor pool construction → seed mint → hop loop → trail invariants.
//!
//! These wire the orchestrator against the nullable capabilities so runs
//! complete instantly and deterministically.

use meander_engine::{EngineError, Orchestrator, RunConfig};
use meander_env::{Env, SeededEntropy};
use meander_nullables::{NullClock, NullDelay, RecordingSink};
use meander_pool::VendorPool;
use meander_types::EventCategory;
use std::collections::HashSet;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_env(seed: u64) -> (Env, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let env = Env {
        clock: Arc::new(NullClock::new(1_700_000_000_000)),
        delay: Arc::new(NullDelay::new()),
        entropy: Arc::new(SeededEntropy::new(seed)),
        sink: sink.clone(),
    };
    (env, sink)
}

fn config(num_hops: u32, pool_size: usize, source_amount: u64) -> RunConfig {
    let mut config = RunConfig::default();
    config.num_hops = num_hops;
    config.pool_size = pool_size;
    config.source_amount = source_amount;
    config
}

// ---------------------------------------------------------------------------
// Full cycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_ten_hop_cycle_over_fifteen_vendors() {
    let (env, _) = test_env(11);
    let mut orchestrator = Orchestrator::new(config(10, 15, 25_000), env).unwrap();
    let outcome = orchestrator.run().await.unwrap();
    let trail = &outcome.trail;

    assert_eq!(trail.len(), 10);
    assert_eq!(trail.final_token.amount, trail.seed.amount);
    assert_eq!(trail.final_token.amount.raw(), 25_000);

    // 1 seed mint + 10 hop mints, 10 redemptions, across the whole pool
    let total_minted: u64 = outcome.mint_stats.iter().map(|s| s.minted_count).sum();
    let total_redeemed: u64 = outcome.mint_stats.iter().map(|s| s.redeemed_count).sum();
    assert_eq!(total_minted, 11);
    assert_eq!(total_redeemed, 10);

    let total_value_redeemed: u64 = outcome
        .mint_stats
        .iter()
        .map(|s| s.total_value_redeemed)
        .sum();
    assert_eq!(total_value_redeemed, 25_000 * 10);
}

#[tokio::test]
async fn adjacent_hops_never_share_a_destination() {
    let (env, _) = test_env(12);
    let mut orchestrator = Orchestrator::new(config(10, 15, 10_000), env).unwrap();
    let trail = orchestrator.run().await.unwrap().trail;

    // every hop moves custody to a different mint than it came from
    for hop in &trail.hops {
        assert_ne!(hop.destination_mint, hop.source_mint);
    }

    // hop n+1 never selects hop n's destination, and custody chains
    for pair in trail.hops.windows(2) {
        assert_ne!(pair[1].destination_mint, pair[0].destination_mint);
        assert_eq!(pair[1].source_mint, pair[0].destination_mint);
    }

    // hop 1 starts from the seed custodian
    assert_eq!(trail.hops[0].source_mint, trail.seed.issuing_mint);
}

#[tokio::test]
async fn every_token_id_in_a_run_is_fresh() {
    let (env, _) = test_env(13);
    let mut orchestrator = Orchestrator::new(config(10, 15, 10_000), env).unwrap();
    let trail = orchestrator.run().await.unwrap().trail;

    let mut ids = HashSet::new();
    assert!(ids.insert(trail.seed.id));
    for hop in &trail.hops {
        assert!(ids.insert(hop.token_after.id), "token id reused mid-chain");
    }
    assert_eq!(trail.final_token.id, trail.hops.last().unwrap().token_after.id);

    // token_before snapshots chain seed -> hop1 -> ... -> final
    assert_eq!(trail.hops[0].token_before.id, trail.seed.id);
    for pair in trail.hops.windows(2) {
        assert_eq!(pair[1].token_before.id, pair[0].token_after.id);
    }
}

// ---------------------------------------------------------------------------
// Boundary scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn three_vendor_pool_sustains_ten_hops() {
    let (env, _) = test_env(14);
    let mut orchestrator = Orchestrator::new(config(10, 3, 10_000), env).unwrap();
    let outcome = orchestrator.run().await.unwrap();
    let trail = &outcome.trail;

    assert_eq!(trail.len(), 10);
    assert_eq!(trail.final_token.amount.raw(), 10_000);
    for pair in trail.hops.windows(2) {
        assert_ne!(pair[1].destination_mint, pair[0].destination_mint);
    }
}

#[tokio::test]
async fn single_vendor_pool_fails_the_first_hop() {
    let (env, _) = test_env(15);
    let mut orchestrator = Orchestrator::new(config(10, 1, 10_000), env).unwrap();

    let err = orchestrator.run().await.unwrap_err();
    assert!(matches!(err, EngineError::Configuration { .. }));
}

// ---------------------------------------------------------------------------
// Events and determinism
// ---------------------------------------------------------------------------

#[tokio::test]
async fn a_run_emits_the_expected_event_stream() {
    let (env, sink) = test_env(16);
    let mut orchestrator = Orchestrator::new(config(10, 15, 10_000), env).unwrap();
    orchestrator.run().await.unwrap();

    assert_eq!(sink.count_of(EventCategory::MintInit), 15);
    assert_eq!(sink.count_of(EventCategory::MintTokens), 11);
    assert_eq!(sink.count_of(EventCategory::RedeemToken), 10);
    assert_eq!(sink.count_of(EventCategory::HopStart), 10);
    assert_eq!(sink.count_of(EventCategory::HopComplete), 10);
    assert_eq!(sink.count_of(EventCategory::CustodyChainSevered), 1);

    let provenance: Vec<String> = sink
        .events()
        .iter()
        .filter(|e| e.category == EventCategory::MintTokens)
        .filter_map(|e| e.provenance.clone())
        .collect();
    assert_eq!(provenance.len(), 11);
    assert_eq!(provenance[0], "source-data");
    assert_eq!(provenance[1], "hop-1");
    assert_eq!(provenance[10], "hop-10");
}

#[tokio::test]
async fn fixed_seed_reproduces_the_hop_sequence() {
    let (env_a, _) = test_env(42);
    let (env_b, _) = test_env(42);

    let mut run_a = Orchestrator::new(config(10, 15, 10_000), env_a).unwrap();
    let mut run_b = Orchestrator::new(config(10, 15, 10_000), env_b).unwrap();

    let trail_a = run_a.run().await.unwrap().trail;
    let trail_b = run_b.run().await.unwrap().trail;

    assert_eq!(trail_a.seed.id, trail_b.seed.id);
    for (a, b) in trail_a.hops.iter().zip(trail_b.hops.iter()) {
        assert_eq!(a.destination_mint, b.destination_mint);
        assert_eq!(a.token_after.id, b.token_after.id);
    }
}

#[tokio::test]
async fn concurrent_runs_can_share_one_pool() {
    let (env, _) = test_env(18);
    let cfg = config(5, 6, 1_000);
    let pool = VendorPool::initialize(cfg.pool_size, cfg.latency(), &env).unwrap();

    let mut run_a = Orchestrator::with_pool(cfg.clone(), pool.clone(), env.clone()).unwrap();
    let mut run_b = Orchestrator::with_pool(cfg.clone(), pool.clone(), env.clone()).unwrap();

    let (a, b) = tokio::join!(run_a.run(), run_b.run());
    let a = a.unwrap();
    let b = b.unwrap();

    assert_eq!(a.trail.len(), 5);
    assert_eq!(b.trail.len(), 5);
    assert_eq!(a.trail.final_token.amount.raw(), 1_000);
    assert_eq!(b.trail.final_token.amount.raw(), 1_000);

    // shared mints accumulated both runs' operations
    let total_minted: u64 = pool.stats().iter().map(|s| s.minted_count).sum();
    let total_redeemed: u64 = pool.stats().iter().map(|s| s.redeemed_count).sum();
    assert_eq!(total_minted, 2 * 6);
    assert_eq!(total_redeemed, 2 * 5);
}

#[tokio::test]
async fn hop_timestamps_are_ordered() {
    let (env, _) = test_env(17);
    let mut orchestrator = Orchestrator::new(config(5, 4, 500), env).unwrap();
    let trail = orchestrator.run().await.unwrap().trail;

    for hop in &trail.hops {
        assert!(hop.started_at <= hop.completed_at);
        assert_eq!(hop.duration_ms(), 0, "null clock never advances");
    }
}
