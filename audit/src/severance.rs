//! Custody-chain severance verification.

use meander_engine::RunTrail;
use meander_types::{Amount, MintId, TokenId};
use std::collections::HashSet;
use std::fmt;

/// A specific way a trail fails the severance check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeveranceViolation {
    /// A hop used the same mint as the immediately preceding custodian.
    AdjacentReuse { hop_number: u32, mint_id: MintId },

    /// A token id appears more than once in the trail.
    DuplicateTokenId { token_id: TokenId },

    /// The final amount differs from the seed amount.
    AmountMismatch { seed: Amount, final_amount: Amount },

    /// A hop does not pick up custody where the previous one left it.
    BrokenCustodyLink { hop_number: u32 },
}

impl fmt::Display for SeveranceViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdjacentReuse {
                hop_number,
                mint_id,
            } => write!(f, "hop {hop_number} reused adjacent mint {}", mint_id.short()),
            Self::DuplicateTokenId { token_id } => {
                write!(f, "token id {} appears more than once", token_id.short())
            }
            Self::AmountMismatch { seed, final_amount } => {
                write!(f, "amount not conserved: seed {seed}, final {final_amount}")
            }
            Self::BrokenCustodyLink { hop_number } => {
                write!(f, "hop {hop_number} breaks the custody chain")
            }
        }
    }
}

/// Every violation in a trail, in chain order. Empty for a well-formed run.
pub fn severance_violations(trail: &RunTrail) -> Vec<SeveranceViolation> {
    let mut violations = Vec::new();

    // (a) adjacency and custody continuity
    if let Some(first) = trail.hops.first() {
        if first.source_mint != trail.seed.issuing_mint
            || first.token_before.id != trail.seed.id
        {
            violations.push(SeveranceViolation::BrokenCustodyLink { hop_number: 1 });
        }
        if first.destination_mint == first.source_mint {
            violations.push(SeveranceViolation::AdjacentReuse {
                hop_number: first.hop_number,
                mint_id: first.destination_mint,
            });
        }
    }
    for pair in trail.hops.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.destination_mint == prev.destination_mint {
            violations.push(SeveranceViolation::AdjacentReuse {
                hop_number: next.hop_number,
                mint_id: next.destination_mint,
            });
        }
        if next.source_mint != prev.destination_mint || next.token_before.id != prev.token_after.id
        {
            violations.push(SeveranceViolation::BrokenCustodyLink {
                hop_number: next.hop_number,
            });
        }
    }
    if let Some(last) = trail.hops.last() {
        if trail.final_token.id != last.token_after.id {
            violations.push(SeveranceViolation::BrokenCustodyLink {
                hop_number: last.hop_number,
            });
        }
    }

    // (b) token-identity freshness
    let mut seen: HashSet<TokenId> = HashSet::new();
    seen.insert(trail.seed.id);
    for hop in &trail.hops {
        if !seen.insert(hop.token_after.id) {
            violations.push(SeveranceViolation::DuplicateTokenId {
                token_id: hop.token_after.id,
            });
        }
    }

    // (c) amount conservation
    if trail.final_token.amount != trail.seed.amount {
        violations.push(SeveranceViolation::AmountMismatch {
            seed: trail.seed.amount,
            final_amount: trail.final_token.amount,
        });
    }

    violations
}

/// The externally observable correctness check for a completed run.
pub fn verify_chain_severance(trail: &RunTrail) -> bool {
    severance_violations(trail).is_empty()
}
