//! Shared Cache Handle
//!
//! Wraps a [`RecencyCache`] for use from many async tasks.

use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, RecencyCache, Touch};
use crate::error::Result;

// == Shared Recency Cache ==
/// Cloneable, task-safe handle to one [`RecencyCache`].
///
/// The index and the order are guarded by a single lock, so no task can
/// observe one updated without the other. `touch` holds the write lock for
/// the whole operation; read-only calls share the read lock.
///
/// # Example
/// ```
/// # #[tokio::main]
/// # async fn main() -> recency_cache::Result<()> {
/// use recency_cache::SharedRecencyCache;
///
/// let cache = SharedRecencyCache::with_capacity(128)?;
/// let worker = cache.clone();
/// tokio::spawn(async move { worker.touch(7).await }).await.unwrap();
/// assert!(cache.contains(&7).await);
/// # Ok(())
/// # }
/// ```
pub struct SharedRecencyCache<T> {
    inner: Arc<RwLock<RecencyCache<T>>>,
}

impl<T> SharedRecencyCache<T>
where
    T: Eq + Hash + Clone + 'static,
{
    // == Constructor ==
    /// Wraps an existing cache.
    pub fn new(cache: RecencyCache<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a shared, empty cache holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        RecencyCache::new(capacity).map(Self::new)
    }

    // == Touch ==
    /// Inserts or promotes `value` under the write lock.
    pub async fn touch(&self, value: T) -> Touch<T> {
        self.inner.write().await.touch(value)
    }

    // == Snapshot ==
    /// Returns every resident value, most recently used first.
    pub async fn snapshot(&self) -> Vec<T> {
        self.inner.read().await.snapshot()
    }

    // == Read Accessors ==
    /// Checks whether a value is resident without changing its recency.
    pub async fn contains(&self, value: &T) -> bool {
        self.inner.read().await.contains(value)
    }

    /// Returns the current number of resident values.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns true if no values are resident.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Returns the maximum number of resident values.
    pub async fn capacity(&self) -> usize {
        self.inner.read().await.capacity()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }
}

impl<T> Clone for SharedRecencyCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for SharedRecencyCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRecencyCache").finish_non_exhaustive()
    }
}
