//! Engine errors.

use meander_mint::MintError;
use meander_pool::PoolError;
use thiserror::Error;

/// Terminal failure of a transmigration run.
///
/// Any error aborts the run as a whole: there is no hop-level retry and
/// no partial-chain recovery.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    #[error("mint operation failed: {0}")]
    Mint(#[from] MintError),
}

impl EngineError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}

// Pool exhaustion means the pool is too small for the exclusion policy,
// which is a configuration problem from the caller's point of view.
impl From<PoolError> for EngineError {
    fn from(err: PoolError) -> Self {
        Self::Configuration {
            reason: format!("vendor pool cannot satisfy selection: {err}"),
        }
    }
}
