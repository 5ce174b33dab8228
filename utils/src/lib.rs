//! Shared utilities for the meander workspace.

pub mod logging;
pub mod time;

pub use logging::{init_tracing, init_tracing_with_file};
pub use time::format_duration_ms;
