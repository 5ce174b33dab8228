//! Run configuration with TOML file support.

use crate::error::EngineError;
use meander_mint::LatencyRange;
use serde::{Deserialize, Serialize};

/// Configuration for one transmigration run.
///
/// Can be loaded from a TOML file via [`RunConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of redeem+mint hops after the initial seed mint.
    #[serde(default = "default_num_hops")]
    pub num_hops: u32,

    /// Number of simulated mints in the vendor pool.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,

    /// Amount minted at the seed vendor and preserved across the chain.
    #[serde(default = "default_source_amount")]
    pub source_amount: u64,

    /// Whether to run against simulated mints. Real-mint mode is
    /// unimplemented; `false` is rejected by validation.
    #[serde(default = "default_true")]
    pub mock_mode: bool,

    /// Minimum simulated per-operation latency, milliseconds.
    #[serde(default = "default_min_latency_ms")]
    pub min_latency_ms: u64,

    /// Maximum simulated per-operation latency, milliseconds.
    #[serde(default = "default_max_latency_ms")]
    pub max_latency_ms: u64,

    /// Provenance tag attached to the seed mint operation.
    #[serde(default = "default_source_tag")]
    pub source_tag: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_num_hops() -> u32 {
    10
}

fn default_pool_size() -> usize {
    15
}

fn default_source_amount() -> u64 {
    10_000
}

fn default_true() -> bool {
    true
}

fn default_min_latency_ms() -> u64 {
    30
}

fn default_max_latency_ms() -> u64 {
    150
}

fn default_source_tag() -> String {
    "source-data".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl RunConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::configuration(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, EngineError> {
        toml::from_str(s).map_err(|e| EngineError::configuration(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("RunConfig is always serializable to TOML")
    }

    /// The simulated latency interval shared by every mint in the pool.
    pub fn latency(&self) -> LatencyRange {
        LatencyRange::new(self.min_latency_ms, self.max_latency_ms)
    }

    /// Reject configurations the engine cannot run.
    ///
    /// A pool of size 1 passes here: it fails at the first hop's
    /// selection, where the exclusion constraint actually bites.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.num_hops == 0 {
            return Err(EngineError::configuration("hop count must be positive"));
        }
        if self.source_amount == 0 {
            return Err(EngineError::configuration("source amount must be positive"));
        }
        if self.pool_size == 0 {
            return Err(EngineError::configuration(
                "vendor pool size must be positive",
            ));
        }
        if self.min_latency_ms > self.max_latency_ms {
            return Err(EngineError::configuration(format!(
                "latency range inverted: {}..{}",
                self.min_latency_ms, self.max_latency_ms
            )));
        }
        if !self.mock_mode {
            return Err(EngineError::configuration(
                "real mint mode is not implemented; set mock_mode = true",
            ));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_hops: default_num_hops(),
            pool_size: default_pool_size(),
            source_amount: default_source_amount(),
            mock_mode: default_true(),
            min_latency_ms: default_min_latency_ms(),
            max_latency_ms: default_max_latency_ms(),
            source_tag: default_source_tag(),
        }
    }
}
