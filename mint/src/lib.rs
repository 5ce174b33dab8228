//! Bearer tokens and the simulated custodial mint service.
//!
//! A mint can issue a fresh token for an amount and redeem a previously
//! issued token back into spendable amount, recording per-operation
//! counters and simulating variable service latency. The [`Mint`] trait is
//! the seam where a real custodial backend would plug in; [`MockMint`]
//! is the simulated implementation used by the transmigration engine.

pub mod error;
pub mod mint;
pub mod token;

pub use error::MintError;
pub use mint::{LatencyRange, MintStats, Mint, MockMint};
pub use token::BearerToken;
