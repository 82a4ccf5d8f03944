//! Cache Module
//!
//! Provides the bounded recency cache with O(1) touch and LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use lru::Iter;
pub use stats::CacheStats;
pub use store::{RecencyCache, Touch};
