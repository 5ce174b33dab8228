//! Hop records and the run trail data model.

use meander_mint::{BearerToken, MintStats};
use meander_types::{Amount, MintId, Timestamp, TokenId};
use serde::{Deserialize, Serialize};

/// Id and amount of a token at one point in the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    pub id: TokenId,
    pub amount: Amount,
}

impl From<&BearerToken> for TokenSnapshot {
    fn from(token: &BearerToken) -> Self {
        Self {
            id: token.id,
            amount: token.amount,
        }
    }
}

/// One redeem+mint cycle moving a token's custody between two mints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopRecord {
    /// 1-indexed position within the run.
    pub hop_number: u32,

    /// The custodian before this hop — the mint that issued `token_before`.
    pub source_mint: MintId,

    /// The mint that redeemed `token_before` and issued `token_after`.
    pub destination_mint: MintId,

    pub token_before: TokenSnapshot,
    pub token_after: TokenSnapshot,

    pub started_at: Timestamp,
    pub completed_at: Timestamp,
}

impl HopRecord {
    pub fn duration_ms(&self) -> u64 {
        self.started_at.elapsed_since(self.completed_at)
    }
}

/// The full ordered record of one run: seed token, every hop, final token.
///
/// Owned exclusively by one orchestrator invocation; the caller keeps or
/// discards it after completion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunTrail {
    pub seed: BearerToken,
    pub final_token: BearerToken,
    pub hops: Vec<HopRecord>,
}

impl RunTrail {
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}

/// The plain data result handed back to the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunOutcome {
    pub trail: RunTrail,
    pub mint_stats: Vec<MintStats>,
}
