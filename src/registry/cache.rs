//! Injected cache tiers for the registry.

use dashmap::DashMap;

use crate::types::TypeDigit;

/// A per-digit cache.
///
/// `set` is write-once: a second `set` for a filled slot keeps the first
/// value, so two threads racing to load the same digit agree on the result.
pub trait Cache<V>: Send + Sync {
    fn get(&self, digit: TypeDigit) -> Option<V>;

    fn set(&self, digit: TypeDigit, value: V);

    fn invalidate(&self, digit: TypeDigit);

    fn clear(&self);
}

/// In-process cache backed by a concurrent map.
#[derive(Debug)]
pub struct MemoryCache<V> {
    entries: DashMap<TypeDigit, V>,
}

impl<V> MemoryCache<V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync> Cache<V> for MemoryCache<V> {
    fn get(&self, digit: TypeDigit) -> Option<V> {
        self.entries.get(&digit).map(|entry| entry.value().clone())
    }

    fn set(&self, digit: TypeDigit, value: V) {
        self.entries.entry(digit).or_insert(value);
    }

    fn invalidate(&self, digit: TypeDigit) {
        self.entries.remove(&digit);
    }

    fn clear(&self) {
        self.entries.clear();
    }
}
