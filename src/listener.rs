//! Eviction listener, a callback invoked when a value leaves the cache.
//!
//! # Example
//! ```
//! use recency_cache::{FnListener, RecencyCache};
//! use std::sync::{Arc, Mutex};
//!
//! let evicted = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&evicted);
//!
//! let mut cache = RecencyCache::new(2)
//!     .unwrap()
//!     .with_listener(FnListener(move |value: &u32| sink.lock().unwrap().push(*value)));
//!
//! cache.touch(1);
//! cache.touch(2);
//! cache.touch(3);
//! assert_eq!(*evicted.lock().unwrap(), vec![1]);
//! ```

// == Eviction Listener ==
/// A callback invoked each time a value is evicted for capacity.
///
/// The cache calls the listener after its own state is consistent again, so
/// the evicted value is already absent from the index and the order.
///
/// Do not call back into the same cache from inside the listener. On a
/// [`SharedRecencyCache`](crate::SharedRecencyCache) the write lock is still
/// held and re-entering would deadlock.
pub trait EvictionListener<T>: Send + Sync + 'static {
    /// Called once for each value evicted for capacity.
    fn on_evict(&self, value: &T);
}

// == Closure Adapter ==
/// An [`EvictionListener`] backed by a closure.
pub struct FnListener<F>(pub F);

impl<T, F> EvictionListener<T> for FnListener<F>
where
    F: Fn(&T) + Send + Sync + 'static,
{
    fn on_evict(&self, value: &T) {
        (self.0)(value)
    }
}
