//! In-memory KvStore for unit testing
//!
//! Provides a mock implementation of [`KvStore`] so the bookkeeping engine
//! can be tested without a running etcd. State lives in a `BTreeMap`, which
//! gives prefix scans the same ascending key order the real store returns.
//!
//! Named locks are real mutual exclusion: `lock` polls until the name is
//! free, so concurrency tests exercise the same serialization the etcd lock
//! service provides.

use crate::error::StoreError;
use crate::kv_trait::KvStore;
use crate::models::{KvPair, LockHandle};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    kvs: Arc<Mutex<BTreeMap<String, String>>>,
    held_locks: Arc<Mutex<HashSet<String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a key/value pair (for test setup).
    pub fn seed(&self, key: &str, value: &str) {
        self.kvs
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Returns the raw value at `key` (for test assertions).
    pub fn raw(&self, key: &str) -> Option<String> {
        self.kvs.lock().unwrap().get(key).cloned()
    }

    /// Number of stored keys (for test assertions).
    pub fn len(&self) -> usize {
        self.kvs.lock().unwrap().len()
    }

    /// True when no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.kvs.lock().unwrap().is_empty()
    }
}

#[async_trait::async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.kvs.lock().unwrap().get(key).cloned())
    }

    async fn get_prefix(&self, prefix: &str) -> Result<Vec<KvPair>, StoreError> {
        Ok(self
            .kvs
            .lock()
            .unwrap()
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| KvPair {
                key: k.clone(),
                value: v.clone(),
            })
            .collect())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.kvs
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.kvs.lock().unwrap().remove(key);
        Ok(())
    }

    async fn lock(&self, name: &str) -> Result<LockHandle, StoreError> {
        loop {
            if self.held_locks.lock().unwrap().insert(name.to_string()) {
                return Ok(LockHandle::new(name, "0"));
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    async fn unlock(&self, handle: LockHandle) -> Result<(), StoreError> {
        self.held_locks.lock().unwrap().remove(&handle.key_b64);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prefix_scan_is_bounded_and_ordered() {
        let store = MemoryStore::new();
        store.seed("/anchor/user/b", "2");
        store.seed("/anchor/user/a", "1");
        store.seed("/anchor/gw/x", "gw");

        let pairs = store.get_prefix("/anchor/user/").await.unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].key, "/anchor/user/a");
        assert_eq!(pairs[1].key, "/anchor/user/b");
    }

    #[tokio::test]
    async fn lock_excludes_same_name_only() {
        let store = MemoryStore::new();
        let a = store.lock("pool/team-a").await.unwrap();
        // A different name is acquirable while the first is held.
        let b = store.lock("pool/team-b").await.unwrap();
        store.unlock(a).await.unwrap();
        store.unlock(b).await.unwrap();

        // Once released, the same name is acquirable again.
        let a2 = store.lock("pool/team-a").await.unwrap();
        store.unlock(a2).await.unwrap();
    }
}
