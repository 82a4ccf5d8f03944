//! Recency Cache - a bounded set of values with LRU eviction
//!
//! Tracks at most `capacity` distinct values ordered from most to least
//! recently used, with O(1) insert, promote, and evict.
//!
//! ```
//! use recency_cache::RecencyCache;
//!
//! let mut cache = RecencyCache::new(3)?;
//! cache.touch(1);
//! cache.touch(2);
//! cache.touch(3);
//! cache.touch(4);
//! assert_eq!(cache.snapshot(), vec![4, 3, 2]);
//! # Ok::<(), recency_cache::CacheError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod listener;
pub mod shared;

pub use cache::{CacheStats, RecencyCache, Touch};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use listener::{EvictionListener, FnListener};
pub use shared::SharedRecencyCache;
