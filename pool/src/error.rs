//! Vendor pool errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("vendor pool cannot be empty")]
    Empty,

    #[error("selection exhausted: all {pool_size} vendors excluded")]
    Exhausted { pool_size: usize },
}
