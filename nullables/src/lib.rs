//! Nullable infrastructure for deterministic testing.
//!
//! Every external effect the core depends on (clock, latency, event
//! emission) sits behind a `meander-env` trait. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Complete instantly, never touching timers or the filesystem
//!
//! Usage: swap these in for the system implementations when building an
//! [`meander_env::Env`] for tests. Deterministic *randomness* is provided
//! by `meander_env::SeededEntropy`, since seeded runs are also a supported
//! CLI mode rather than test-only behavior.

pub mod clock;
pub mod delay;
pub mod sink;

pub use clock::NullClock;
pub use delay::NullDelay;
pub use sink::RecordingSink;
