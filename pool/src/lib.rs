//! Vendor pool — the fixed set of candidate mints available for hop
//! selection, with uniform exclusion-aware selection.

pub mod error;
pub mod pool;

pub use error::PoolError;
pub use pool::VendorPool;
