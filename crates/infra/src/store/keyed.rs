use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::StoreError;

/// Lock-guarded key/value map shared by the in-memory repositories.
///
/// The lock is a private field, so nothing about synchronization leaks into
/// the repository contracts. Every read takes the read lock and every write
/// the write lock, which makes reads linearizable with respect to writes.
/// Each operation holds the lock only for the map access itself; values are
/// cloned in and out so callers never alias stored state.
#[derive(Debug)]
pub struct InMemoryKeyedStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryKeyedStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryKeyedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> InMemoryKeyedStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<K, V>>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<K, V>>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))
    }

    pub fn get(&self, key: &K) -> Result<Option<V>, StoreError> {
        Ok(self.read()?.get(key).cloned())
    }

    /// Snapshot of all values, in no particular order.
    pub fn values(&self) -> Result<Vec<V>, StoreError> {
        Ok(self.read()?.values().cloned().collect())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    /// Insert unless the key is present. Returns `true` if the value was stored.
    ///
    /// The presence check and the insert happen under one write lock.
    pub fn insert_if_absent(&self, key: K, value: V) -> Result<bool, StoreError> {
        match self.write()?.entry(key) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(true)
            }
        }
    }

    /// Insert or replace. Returns `true` if the key was new.
    pub fn upsert(&self, key: K, value: V) -> Result<bool, StoreError> {
        Ok(self.write()?.insert(key, value).is_none())
    }

    /// Remove the key if present, returning the old value.
    pub fn remove(&self, key: &K) -> Result<Option<V>, StoreError> {
        Ok(self.write()?.remove(key))
    }
}
