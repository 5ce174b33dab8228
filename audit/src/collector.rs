//! Aggregating event collector.

use meander_env::EventSink;
use meander_types::{AuditEvent, EventCategory, MintId};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

/// Per-mint operation tallies derived from the event stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OpCounts {
    pub minted: u64,
    pub redeemed: u64,
    pub value_minted: u64,
    pub value_redeemed: u64,
}

/// Collects the structured events a run emits.
///
/// Wire it in as the run's event sink (usually behind a `FanoutSink`
/// alongside the tracing sink) and read the aggregates after completion.
#[derive(Default)]
pub struct AuditCollector {
    events: Mutex<Vec<AuditEvent>>,
    per_mint: Mutex<HashMap<MintId, OpCounts>>,
}

impl AuditCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every recorded event, in emission order.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// How many recorded events have the given category.
    pub fn count_of(&self, category: EventCategory) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.category == category)
            .count()
    }

    /// Mint/redeem tallies keyed by mint id.
    pub fn per_mint_counts(&self) -> HashMap<MintId, OpCounts> {
        self.per_mint.lock().unwrap().clone()
    }

    /// Total mint + redeem operations observed across every mint.
    pub fn total_operations(&self) -> u64 {
        self.per_mint
            .lock()
            .unwrap()
            .values()
            .map(|c| c.minted + c.redeemed)
            .sum()
    }
}

impl EventSink for AuditCollector {
    fn record(&self, event: &AuditEvent) {
        self.events.lock().unwrap().push(event.clone());

        let (Some(mint_id), Some(amount)) = (event.mint_id, event.amount) else {
            return;
        };
        let mut per_mint = self.per_mint.lock().unwrap();
        let counts = per_mint.entry(mint_id).or_default();
        match event.category {
            EventCategory::MintTokens => {
                counts.minted += 1;
                counts.value_minted += amount.raw();
            }
            EventCategory::RedeemToken => {
                counts.redeemed += 1;
                counts.value_redeemed += amount.raw();
            }
            _ => {}
        }
    }
}
