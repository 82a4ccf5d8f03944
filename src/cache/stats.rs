//! Cache Statistics Module
//!
//! Tracks how touches were resolved: promotions, insertions, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing a cache's touch history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Touches that found the value resident and promoted it
    pub promotions: u64,
    /// Touches that inserted a value not yet resident
    pub insertions: u64,
    /// Values evicted to make room for an insertion
    pub evictions: u64,
    /// Number of resident values when the stats were taken
    pub size: usize,
    /// Maximum number of resident values
    pub capacity: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Touches ==
    /// Total number of touches recorded.
    pub fn touches(&self) -> u64 {
        self.promotions + self.insertions
    }

    // == Hit Rate ==
    /// Calculates the fraction of touches that found the value resident.
    ///
    /// Returns promotions / (promotions + insertions), or 0.0 if no touches have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.touches();
        if total == 0 {
            0.0
        } else {
            self.promotions as f64 / total as f64
        }
    }

    pub(crate) fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    pub(crate) fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new(8);
        assert_eq!(stats.promotions, 0);
        assert_eq!(stats.insertions, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.size, 0);
        assert_eq!(stats.capacity, 8);
    }

    #[test]
    fn test_hit_rate_no_touches() {
        let stats = CacheStats::new(8);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new(8);
        stats.record_insertion();
        stats.record_promotion();
        stats.record_promotion();
        stats.record_insertion();
        assert_eq!(stats.touches(), 4);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_record_eviction() {
        let mut stats = CacheStats::new(1);
        stats.record_eviction();
        stats.record_eviction();
        assert_eq!(stats.evictions, 2);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new(3);
        stats.record_insertion();
        stats.set_size(1);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["insertions"], 1);
        assert_eq!(json["size"], 1);
        assert_eq!(json["capacity"], 3);
    }
}
