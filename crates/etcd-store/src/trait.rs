//! KvStore trait for mocking
//!
//! Abstracts the store client so the bookkeeping engine can be unit tested
//! against an in-memory implementation. The concrete `EtcdClient` implements
//! this trait; tests use `MemoryStore` from the `mock` module.

use crate::error::StoreError;
use crate::models::{KvPair, LockHandle};

/// Contract over the distributed key-value store backing all persisted state.
///
/// All async methods must be `Send` to work with Tokio's work-stealing
/// runtime. No method retries internally; transient failures surface as
/// [`StoreError`].
#[async_trait::async_trait]
pub trait KvStore: Send + Sync {
    /// Point read. Absence of the key is `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Prefix scan returning key/value pairs in ascending key order.
    async fn get_prefix(&self, prefix: &str) -> Result<Vec<KvPair>, StoreError>;

    /// Writes `value` at `key`, creating or overwriting.
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Acquires the named mutual-exclusion lock, blocking until held.
    async fn lock(&self, name: &str) -> Result<LockHandle, StoreError>;

    /// Releases a lock previously returned by [`KvStore::lock`].
    async fn unlock(&self, handle: LockHandle) -> Result<(), StoreError>;
}
