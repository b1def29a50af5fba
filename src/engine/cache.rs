// Keyed Memoization - Compute-if-absent cache shared by every engine
// Entries are written once and never evicted

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Thread-safe write-once cache.
///
/// The computation runs while the map is locked, so each key is computed at
/// most once and a reader never observes a partially built value. A failed
/// computation leaves the key absent.
#[derive(Debug)]
pub struct MemoCache<K, V> {
    name: &'static str,
    entries: Mutex<HashMap<K, Arc<V>>>,
    computations: AtomicUsize,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Debug,
{
    /// Create an empty cache; `name` tags log lines
    pub fn new(name: &'static str) -> Self {
        MemoCache {
            name,
            entries: Mutex::new(HashMap::new()),
            computations: AtomicUsize::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Arc<V>>> {
        // Values are inserted only after they are fully computed, so a
        // poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the cached value for `key`, computing and storing it first if
    /// absent
    pub fn get_or_try_insert_with<E, F>(&self, key: K, compute: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let mut entries = self.lock();

        if let Some(value) = entries.get(&key) {
            log::trace!("{}: cache hit for {:?}", self.name, key);
            return Ok(Arc::clone(value));
        }

        log::debug!("{}: computing {:?}", self.name, key);
        let value = Arc::new(compute()?);
        self.computations.fetch_add(1, Ordering::Relaxed);
        entries.insert(key, Arc::clone(&value));

        Ok(value)
    }

    /// Cached value for `key`, if present
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of successful computations so far
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::Relaxed)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
