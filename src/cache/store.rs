//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with the arena recency order.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, info, trace};

use crate::cache::lru::{Iter, RecencyList, MAX_PREALLOCATED_SLOTS};
use crate::cache::CacheStats;
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::listener::EvictionListener;

// == Touch Outcome ==
/// How a call to [`RecencyCache::touch`] was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Touch<T> {
    /// The value was already resident and is now the most recently used.
    Promoted,
    /// The value was new and fit without eviction.
    Inserted,
    /// The value was new and the least recently used value made room for it.
    Replaced {
        /// The value that was evicted
        evicted: T,
    },
}

impl<T> Touch<T> {
    /// Returns the evicted value, if the touch caused an eviction.
    pub fn evicted(self) -> Option<T> {
        match self {
            Touch::Replaced { evicted } => Some(evicted),
            Touch::Promoted | Touch::Inserted => None,
        }
    }

    /// Returns true if the value was already resident.
    pub fn is_promoted(&self) -> bool {
        matches!(self, Touch::Promoted)
    }
}

// == Recency Cache ==
/// A bounded set of distinct values ordered from most to least recently used.
///
/// Each value is its own lookup key. The index stores a clone of every
/// resident value next to the copy held in the recency order, which is why
/// the stored type must be `Eq + Hash + Clone`.
///
/// [`touch`](RecencyCache::touch) is the only mutator. Membership test,
/// promotion, and eviction are all O(1); [`snapshot`](RecencyCache::snapshot)
/// is linear in the number of resident values.
pub struct RecencyCache<T> {
    /// Value -> arena slot of its entry
    index: HashMap<T, usize>,
    /// MRU -> LRU order
    order: RecencyList<T>,
    /// Touch statistics
    stats: CacheStats,
    /// Maximum number of resident values, always at least 1
    capacity: usize,
    /// Optional eviction callback
    listener: Option<Box<dyn EvictionListener<T>>>,
}

impl<T> RecencyCache<T>
where
    T: Eq + Hash + Clone + 'static,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` values.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            index: HashMap::with_capacity(capacity.min(MAX_PREALLOCATED_SLOTS)),
            order: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(capacity),
            capacity,
            listener: None,
        })
    }

    /// Creates an empty cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        let cache = Self::new(config.capacity)?;
        info!(capacity = config.capacity, "recency cache configured");
        Ok(cache)
    }

    /// Registers a listener that receives every value evicted for capacity.
    pub fn with_listener<L>(mut self, listener: L) -> Self
    where
        L: EvictionListener<T>,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    // == Touch ==
    /// Inserts `value` or promotes it to most recently used.
    ///
    /// If the value is resident it moves to the front and nothing is evicted.
    /// Otherwise, when the cache is full, the least recently used value is
    /// evicted first, then `value` is inserted at the front.
    pub fn touch(&mut self, value: T) -> Touch<T> {
        if let Some(&slot) = self.index.get(&value) {
            self.order.move_to_front(slot);
            self.stats.record_promotion();
            trace!(size = self.order.len(), "promoted resident value");
            return Touch::Promoted;
        }

        let evicted = if self.order.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let slot = self.order.push_front(value.clone());
        self.index.insert(value, slot);
        self.stats.record_insertion();
        trace!(size = self.order.len(), "inserted new value");

        match evicted {
            Some(evicted) => {
                if let Some(listener) = &self.listener {
                    listener.on_evict(&evicted);
                }
                Touch::Replaced { evicted }
            }
            None => Touch::Inserted,
        }
    }

    // == Evict ==
    /// Removes the least recently used value from the order and the index.
    fn evict_lru(&mut self) -> Option<T> {
        let evicted = self.order.pop_back()?;
        self.index.remove(&evicted);
        self.stats.record_eviction();
        debug!(
            capacity = self.capacity,
            evictions = self.stats.evictions,
            "evicted least recently used value"
        );
        Some(evicted)
    }

    // == Snapshot ==
    /// Returns every resident value, most recently used first.
    pub fn snapshot(&self) -> Vec<T> {
        self.order.iter().cloned().collect()
    }

    // == Contains ==
    /// Checks whether a value is resident without changing its recency.
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }
}

impl<T> RecencyCache<T> {
    /// Returns the most recently used value.
    pub fn most_recent(&self) -> Option<&T> {
        self.order.front()
    }

    /// Returns the least recently used value, the next eviction candidate.
    pub fn least_recent(&self) -> Option<&T> {
        self.order.back()
    }

    /// Iterates resident values from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        self.order.iter()
    }

    // == Length ==
    /// Returns the current number of resident values.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no values are resident.
    pub fn is_empty(&self) -> bool {
        self.order.len() == 0
    }

    /// Returns the maximum number of resident values.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.order.len());
        stats
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self)
    where
        T: Eq + Hash + fmt::Debug,
    {
        use std::collections::HashSet;

        let ordered: Vec<&T> = self.order.iter().collect();
        let unique: HashSet<&T> = ordered.iter().copied().collect();
        let indexed: HashSet<&T> = self.index.keys().collect();

        assert_eq!(ordered.len(), self.order.len(), "order length drifted");
        assert_eq!(ordered.len(), unique.len(), "duplicate value in order");
        assert_eq!(unique, indexed, "index and order disagree");
        assert!(self.order.len() <= self.capacity, "capacity exceeded");
        for (value, &slot) in &self.index {
            assert_eq!(self.order.get(slot), Some(value), "index points at wrong slot");
        }
    }
}

impl<'a, T> IntoIterator for &'a RecencyCache<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for RecencyCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyCache")
            .field("capacity", &self.capacity)
            .field("len", &self.order.len())
            .field("stats", &self.stats)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
