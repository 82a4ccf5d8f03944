//! Integration Tests for the public cache API
//!
//! Exercises the crate the way a downstream user would.

use std::sync::{Arc, Mutex};

use recency_cache::{CacheConfig, CacheError, FnListener, RecencyCache, SharedRecencyCache, Touch};

// == Helper Functions ==

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recency_cache=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

// == Scenario Tests ==

#[test]
fn test_capacity_three_scenario() {
    init_tracing();
    let mut cache = RecencyCache::new(3).unwrap();

    cache.touch(1);
    cache.touch(2);
    cache.touch(3);
    assert_eq!(cache.snapshot(), vec![3, 2, 1]);

    cache.touch(4);
    assert_eq!(cache.snapshot(), vec![4, 3, 2]);

    cache.touch(2);
    assert_eq!(cache.snapshot(), vec![2, 4, 3]);
}

#[test]
fn test_capacity_one_scenario() {
    let mut cache = RecencyCache::new(1).unwrap();

    cache.touch(1);
    cache.touch(2);

    assert_eq!(cache.snapshot(), vec![2]);
}

#[test]
fn test_zero_capacity_is_rejected() {
    let err = RecencyCache::<i32>::new(0).unwrap_err();
    assert_eq!(err, CacheError::InvalidCapacity(0));
}

#[test]
fn test_cache_built_from_config() {
    init_tracing();
    let config = CacheConfig::new(2);
    let mut cache = RecencyCache::from_config(&config).unwrap();

    assert_eq!(cache.touch("x"), Touch::Inserted);
    assert_eq!(cache.touch("y"), Touch::Inserted);
    assert_eq!(cache.touch("z"), Touch::Replaced { evicted: "x" });
    assert_eq!(cache.capacity(), 2);
}

#[test]
fn test_eviction_listener_sees_each_victim_once() {
    init_tracing();
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let mut cache = RecencyCache::new(2)
        .unwrap()
        .with_listener(FnListener(move |value: &String| {
            sink.lock().unwrap().push(value.clone());
        }));

    for word in ["a", "b", "c", "b", "d", "e"] {
        cache.touch(word.to_string());
    }

    assert_eq!(*log.lock().unwrap(), vec!["a", "c", "b"]);
    assert_eq!(cache.snapshot(), vec!["e".to_string(), "d".to_string()]);
    assert_eq!(cache.stats().evictions, 3);
}

#[test]
fn test_stats_serialize_to_json() {
    let mut cache = RecencyCache::new(2).unwrap();
    cache.touch(1u64);
    cache.touch(1u64);

    let json = serde_json::to_value(cache.stats()).unwrap();
    assert_eq!(json["promotions"], 1);
    assert_eq!(json["insertions"], 1);
    assert_eq!(json["evictions"], 0);
    assert_eq!(json["size"], 1);
}

#[test]
fn test_large_capacity_does_not_preallocate_everything() {
    let mut cache = RecencyCache::new(usize::MAX).unwrap();
    for value in 0..10_000u32 {
        cache.touch(value);
    }
    assert_eq!(cache.len(), 10_000);
    assert_eq!(cache.least_recent(), Some(&0));
}

#[tokio::test]
async fn test_shared_cache_across_tasks() {
    let cache = SharedRecencyCache::with_capacity(3).unwrap();

    let writers: Vec<_> = (0..3u32)
        .map(|offset| {
            let cache = cache.clone();
            tokio::spawn(async move {
                for value in 0..10u32 {
                    cache.touch(value * 3 + offset).await;
                }
            })
        })
        .collect();
    for writer in writers {
        writer.await.unwrap();
    }

    let snapshot = cache.snapshot().await;
    assert_eq!(snapshot.len(), 3);
    assert_eq!(cache.stats().await.evictions, 27);
}
