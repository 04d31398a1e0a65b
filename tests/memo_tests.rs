//! Integration tests for memoization.
//!
//! Exercises the cache from several threads: each key must be evaluated at
//! most once while resident, and the capacity bound must hold.

use fun::memo::{Memoized, memoize, memoize0};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[rstest]
fn test_memoize0_evaluates_once_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let value = Arc::new(memoize0(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        "configuration".to_string()
    }));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let value = Arc::clone(&value);
            thread::spawn(move || (*value)())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "configuration");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_concurrent_misses_on_one_key_evaluate_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let cache = Arc::new(Memoized::new(
        move |key: u32| {
            counter.fetch_add(1, Ordering::SeqCst);
            thread::sleep(std::time::Duration::from_millis(5));
            key * 2
        },
        8,
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get(21))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 42);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn test_capacity_is_respected(#[case] capacity: usize) {
    let cache = memoize(|key: usize| key + 1, capacity);
    for key in 0..20 {
        assert_eq!(cache.get(key), key + 1);
        assert!(cache.len() <= capacity);
    }
    assert_eq!(cache.len(), capacity);
    assert_eq!(cache.capacity(), capacity);
}

#[rstest]
fn test_evicted_key_is_recomputed() {
    let calls = AtomicUsize::new(0);
    let cache = memoize(
        |key: char| {
            calls.fetch_add(1, Ordering::SeqCst);
            key.to_ascii_uppercase()
        },
        2,
    );

    cache.get('a');
    cache.get('b');
    cache.get('a');
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    cache.get('c');
    cache.get('a');
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[rstest]
fn test_clear_empties_cache_and_forces_reevaluation() {
    let calls = AtomicUsize::new(0);
    let cache = memoize(
        |key: u16| {
            calls.fetch_add(1, Ordering::SeqCst);
            u32::from(key) * 3
        },
        4,
    );

    for key in 0..4 {
        cache.get(key);
    }
    assert_eq!(cache.len(), 4);
    assert_eq!(calls.load(Ordering::SeqCst), 4);

    cache.clear();
    assert!(cache.is_empty());

    assert_eq!(cache.get(2), 6);
    assert_eq!(calls.load(Ordering::SeqCst), 5);
    assert_eq!(cache.len(), 1);
}
