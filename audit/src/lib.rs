//! Audit aggregation and post-run verification.
//!
//! The collector consumes the structured event stream a run emits; the
//! severance checker is the externally observable correctness check for a
//! completed trail — no adjacent custodian reuse, fresh token identities
//! throughout, and amount conservation end to end.

pub mod collector;
pub mod severance;

pub use collector::{AuditCollector, OpCounts};
pub use severance::{severance_violations, verify_chain_severance, SeveranceViolation};
