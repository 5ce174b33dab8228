//! Bearer token representation.

use meander_types::{Amount, MintId, Timestamp, TokenId};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A simulated bearer token — a value-carrying record redeemable by
/// whoever holds it, without identity binding.
///
/// Tokens are never mutated in place. Every mint operation constructs a
/// fresh instance with a new id, issuing mint, payload, and timestamp;
/// the amount is the only field that survives a hop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearerToken {
    /// Unique identifier, derived from the other fields at issuance.
    pub id: TokenId,

    /// The mint that produced this token instance.
    pub issuing_mint: MintId,

    /// Denomination-preserving value.
    pub amount: Amount,

    /// Random payload with no semantic meaning, standing in for real
    /// bearer-token entropy (blinded signatures, proofs, …).
    pub payload: [u8; 32],

    /// When this instance was issued.
    pub created_at: Timestamp,
}

impl BearerToken {
    /// Construct a token, deriving its id from the issuing mint, amount,
    /// payload, and issuance time.
    pub fn issue(
        issuing_mint: MintId,
        amount: Amount,
        payload: [u8; 32],
        created_at: Timestamp,
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(issuing_mint.as_bytes());
        hasher.update(amount.raw().to_le_bytes());
        hasher.update(payload);
        hasher.update(created_at.as_millis().to_le_bytes());
        let id = TokenId::new(hasher.finalize().into());

        Self {
            id,
            issuing_mint,
            amount,
            payload,
            created_at,
        }
    }
}
