//! Structured operation events emitted by the core.
//!
//! The core only *produces* these events; formatting and persistence belong
//! to whatever sink the caller wires in (tracing, audit collector, …).

use crate::{Amount, MintId, Timestamp, TokenId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of operation an [`AuditEvent`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// A mint instance came online.
    MintInit,
    /// A mint issued a fresh bearer token.
    MintTokens,
    /// A mint redeemed a bearer token back into spendable amount.
    RedeemToken,
    /// A hop began (destination selected, redemption about to start).
    HopStart,
    /// A hop finished (fresh token issued at the destination).
    HopComplete,
    /// A full transmigration run completed with the chain severed.
    CustodyChainSevered,
}

impl EventCategory {
    /// The stable wire label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MintInit => "MINT_INIT",
            Self::MintTokens => "MINT_TOKENS",
            Self::RedeemToken => "REDEEM_TOKEN",
            Self::HopStart => "HOP_START",
            Self::HopComplete => "HOP_COMPLETE",
            Self::CustodyChainSevered => "CUSTODY_CHAIN_SEVERED",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single structured operation event.
///
/// Not every category carries every field: `MintInit` has no token,
/// `HopStart` has no freshly issued token yet, and so on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub category: EventCategory,
    pub mint_id: Option<MintId>,
    pub token_id: Option<TokenId>,
    pub amount: Option<Amount>,
    /// Caller-supplied provenance tag, present on mint operations.
    pub provenance: Option<String>,
    pub timestamp: Timestamp,
}

impl AuditEvent {
    pub fn new(category: EventCategory, timestamp: Timestamp) -> Self {
        Self {
            category,
            mint_id: None,
            token_id: None,
            amount: None,
            provenance: None,
            timestamp,
        }
    }

    pub fn with_mint(mut self, mint_id: MintId) -> Self {
        self.mint_id = Some(mint_id);
        self
    }

    pub fn with_token(mut self, token_id: TokenId) -> Self {
        self.token_id = Some(token_id);
        self
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_provenance(mut self, tag: impl Into<String>) -> Self {
        self.provenance = Some(tag.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_labels_are_stable() {
        assert_eq!(EventCategory::MintInit.as_str(), "MINT_INIT");
        assert_eq!(EventCategory::MintTokens.as_str(), "MINT_TOKENS");
        assert_eq!(EventCategory::RedeemToken.as_str(), "REDEEM_TOKEN");
        assert_eq!(EventCategory::HopStart.as_str(), "HOP_START");
        assert_eq!(EventCategory::HopComplete.as_str(), "HOP_COMPLETE");
        assert_eq!(
            EventCategory::CustodyChainSevered.as_str(),
            "CUSTODY_CHAIN_SEVERED"
        );
    }

    #[test]
    fn builder_fills_optional_fields() {
        let ev = AuditEvent::new(EventCategory::MintTokens, Timestamp::new(5))
            .with_mint(MintId::new([1u8; 32]))
            .with_token(TokenId::new([2u8; 32]))
            .with_amount(Amount::new(100))
            .with_provenance("hop-3");
        assert_eq!(ev.mint_id, Some(MintId::new([1u8; 32])));
        assert_eq!(ev.token_id, Some(TokenId::new([2u8; 32])));
        assert_eq!(ev.amount, Some(Amount::new(100)));
        assert_eq!(ev.provenance.as_deref(), Some("hop-3"));
        assert_eq!(ev.timestamp, Timestamp::new(5));
    }
}
