//! Memoization of zero- and one-argument functions.
//!
//! [`memoize0`] evaluates a function at most once, however many threads ask
//! for its value. [`Memoized`] caches the results of a one-argument function
//! per key in a bounded cache: once `capacity` entries are resident, the
//! oldest inserted entry is evicted to make room.
//!
//! # Locking
//!
//! A hit takes only a shared read lock. A miss takes a lock dedicated to its
//! key, so concurrent misses on the same key evaluate the function once while
//! misses on different keys proceed in parallel. The cache write lock is held
//! only for the insertion itself.
//!
//! # Examples
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use fun::memo::memoize;
//!
//! let calls = AtomicUsize::new(0);
//! let square = memoize(
//!     |n: u64| {
//!         calls.fetch_add(1, Ordering::SeqCst);
//!         n * n
//!     },
//!     16,
//! );
//!
//! assert_eq!(square.get(12), 144);
//! assert_eq!(square.get(12), 144);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use parking_lot::{Mutex, RwLock};

/// Wraps `function` so that it runs at most once; later calls return a clone
/// of the first result.
///
/// # Examples
///
/// ```
/// use fun::memo::memoize0;
///
/// let config = memoize0(|| vec!["a".to_string(), "b".to_string()]);
/// assert_eq!(config(), config());
/// ```
pub fn memoize0<T, F>(function: F) -> impl Fn() -> T
where
    T: Clone,
    F: Fn() -> T,
{
    let cell = OnceLock::new();
    move || cell.get_or_init(&function).clone()
}

/// Builds a [`Memoized`] cache of `function` holding at most `capacity`
/// entries.
#[must_use]
pub fn memoize<K, V, F>(function: F, capacity: usize) -> Memoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(K) -> V,
{
    Memoized::new(function, capacity)
}

/// A one-argument function with a bounded, first-in-first-out result cache.
///
/// A capacity of zero disables caching: every call evaluates the function.
pub struct Memoized<K, V, F> {
    function: F,
    capacity: usize,
    cache: RwLock<Cache<K, V>>,
    in_flight: Mutex<HashMap<K, Gate>>,
}

struct Cache<K, V> {
    entries: HashMap<K, V>,
    insertion_order: VecDeque<K>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            insertion_order: VecDeque::with_capacity(capacity),
        }
    }

    fn insert(&mut self, key: K, value: V, capacity: usize) {
        if self.entries.contains_key(&key) {
            return;
        }
        while self.entries.len() >= capacity {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);

            #[cfg(feature = "tracing")]
            tracing::trace!(capacity, "memo cache evicted its oldest entry");
        }
        self.insertion_order.push_back(key.clone());
        self.entries.insert(key, value);
    }
}

impl<K, V> Cache<K, V> {
    fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }
}

type Gate = Arc<Mutex<()>>;

/// Removes a key's gate from the in-flight table when dropped, including
/// during a panic in the memoized function. A newer gate for the same key is
/// left in place.
struct InFlightRelease<'a, K>
where
    K: Eq + Hash,
{
    in_flight: &'a Mutex<HashMap<K, Gate>>,
    gate: &'a Gate,
    key: K,
}

impl<K> Drop for InFlightRelease<'_, K>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        let mut in_flight = self.in_flight.lock();
        if in_flight.get(&self.key).is_some_and(|current| Arc::ptr_eq(current, self.gate)) {
            in_flight.remove(&self.key);
        }
    }
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(K) -> V,
{
    /// Wraps `function` in a cache of at most `capacity` entries.
    #[must_use]
    pub fn new(function: F, capacity: usize) -> Self {
        Self {
            function,
            capacity,
            cache: RwLock::new(Cache::with_capacity(capacity)),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached result for `key`, evaluating the function on a miss.
    ///
    /// A hit only takes the cache's shared read lock, for as long as it takes
    /// to clone the value. A miss holds the write lock just for its insertion,
    /// so hits never wait for the function to run.
    pub fn get(&self, key: K) -> V {
        if self.capacity == 0 {
            return (self.function)(key);
        }
        if let Some(value) = self.cached(&key) {
            return value;
        }

        let gate = Arc::clone(self.in_flight.lock().entry(key.clone()).or_default());
        let _evaluating = gate.lock();
        let _release = InFlightRelease {
            in_flight: &self.in_flight,
            gate: &gate,
            key: key.clone(),
        };

        // Another caller may have filled the entry while we waited for the gate.
        if let Some(value) = self.cached(&key) {
            return value;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(capacity = self.capacity, "memo cache miss");

        let value = (self.function)(key.clone());
        self.cache.write().insert(key, value.clone(), self.capacity);
        value
    }

    fn cached(&self, key: &K) -> Option<V> {
        self.cache.read().entries.get(key).cloned()
    }
}

impl<K, V, F> Memoized<K, V, F> {
    /// The maximum number of resident entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of resident entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().entries.len()
    }

    /// Returns `true` when no entry is resident.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.read().entries.is_empty()
    }

    /// Drops every resident entry.
    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

impl<K, V, F> fmt::Debug for Memoized<K, V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn memoize0_runs_once() {
        let calls = Cell::new(0);
        let value = memoize0(|| {
            calls.set(calls.get() + 1);
            "computed".to_string()
        });

        assert_eq!(value(), "computed");
        assert_eq!(value(), "computed");
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn evicts_oldest_entry_first() {
        let cache = Memoized::new(|n: i32| n * 10, 2);
        cache.get(1);
        cache.get(2);
        cache.get(3);

        assert_eq!(cache.len(), 2);
        assert!(cache.cached(&1).is_none());
        assert_eq!(cache.cached(&2), Some(20));
        assert_eq!(cache.cached(&3), Some(30));
    }

    #[rstest]
    fn zero_capacity_never_caches() {
        let calls = Cell::new(0);
        let cache = Memoized::new(
            |n: i32| {
                calls.set(calls.get() + 1);
                n
            },
            0,
        );

        cache.get(1);
        cache.get(1);
        assert_eq!(calls.get(), 2);
        assert!(cache.is_empty());
    }

    #[rstest]
    fn clear_forces_reevaluation() {
        let calls = Cell::new(0);
        let cache = memoize(
            |n: u8| {
                calls.set(calls.get() + 1);
                n
            },
            4,
        );

        cache.get(7);
        cache.clear();
        cache.get(7);
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[rstest]
    fn panicking_function_releases_its_key_gate() {
        let cache = Memoized::new(
            |n: u8| {
                assert_ne!(n, 1, "key 1 is rejected");
                n
            },
            4,
        );

        let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| cache.get(1)));

        assert!(unwound.is_err());
        assert!(cache.in_flight.lock().is_empty());
        assert!(cache.is_empty());
        assert_eq!(cache.get(2), 2);
        assert!(cache.in_flight.lock().is_empty());
    }
}
