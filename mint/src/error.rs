//! Mint service errors.
//!
//! The simulated [`MockMint`](crate::MockMint) never fails: no capacity
//! limits or network faults are modeled. These variants exist for real
//! custodial backends implementing the [`Mint`](crate::Mint) trait, which
//! must reject tokens with invalid or already-spent proofs and can lose
//! connectivity mid-operation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MintError {
    #[error("redemption rejected: {0}")]
    RedemptionRejected(String),

    #[error("mint backend network failure: {0}")]
    Network(String),
}
