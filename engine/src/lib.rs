//! The transmigration engine.
//!
//! Drives the hop loop: select a destination mint (never the immediately
//! preceding custodian), redeem the current token there, mint a fresh
//! replacement at the same mint, and record a hop audit entry — repeated
//! until the configured hop count is reached. After the final hop the
//! output token has no mint-traceable link to its origin.

pub mod config;
pub mod error;
pub mod hop;
pub mod orchestrator;

pub use config::RunConfig;
pub use error::EngineError;
pub use hop::{HopRecord, RunOutcome, RunTrail, TokenSnapshot};
pub use orchestrator::{Orchestrator, RunState};
