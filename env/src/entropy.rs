//! Entropy capability — token payloads, id material, and mint selection.

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use std::sync::Mutex;

/// Source of randomness for the core.
///
/// Seedable so test suites (and `--seed` runs) can assert deterministic hop
/// sequences; production runs use [`SystemEntropy`].
pub trait EntropySource: Send + Sync {
    /// Fill `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]);

    /// A uniform index in `0..bound`. `bound` must be non-zero.
    fn pick_index(&self, bound: usize) -> usize;
}

/// OS-seeded entropy via the thread-local generator.
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        rand::rng().fill_bytes(dest);
    }

    fn pick_index(&self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Deterministic entropy from a fixed seed.
///
/// Two instances built from the same seed produce identical byte streams
/// and selection sequences.
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        self.rng.lock().unwrap().fill_bytes(dest);
    }

    fn pick_index(&self, bound: usize) -> usize {
        self.rng.lock().unwrap().random_range(0..bound)
    }
}
