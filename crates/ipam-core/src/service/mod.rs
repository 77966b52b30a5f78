//! The bookkeeping engine façade.
//!
//! One service type carries the whole operation surface; the impl blocks are
//! organized by domain:
//! - `pool`: tenant reserved-address pools (reserve, release, read)
//! - `assignments`: in-use/unused computation and assignment listings
//! - `gateway`: subnet/gateway registrations

pub mod assignments;
pub mod gateway;
pub mod pool;
#[cfg(test)]
mod gateway_test;
#[cfg(test)]
mod pool_test;

use crate::directory::TenantDirectory;
use crate::error::IpamError;
use crate::keys;
use etcd_store::{KvStore, LockHandle};
use std::sync::Arc;
use tracing::warn;

/// Multi-tenant static IP bookkeeping service.
///
/// Holds no state of its own; everything persisted lives in the store, and
/// every method performs a bounded number of store calls. Mutations take a
/// per-resource named lock around their read-modify-write; reads are
/// unlocked best-effort snapshots.
#[derive(Clone)]
pub struct StaticIpService {
    pub(crate) store: Arc<dyn KvStore>,
    pub(crate) directory: Arc<dyn TenantDirectory>,
}

impl std::fmt::Debug for StaticIpService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticIpService").finish_non_exhaustive()
    }
}

impl StaticIpService {
    /// Creates a service over the given store and tenant directory.
    pub fn new(store: Arc<dyn KvStore>, directory: Arc<dyn TenantDirectory>) -> Self {
        Self { store, directory }
    }

    /// Union of every tenant's owned addresses, as one flat list.
    ///
    /// Unlocked snapshot: the duplicate checks built on it are best-effort
    /// under concurrent writers.
    pub(crate) async fn global_owned(&self) -> Result<Vec<String>, IpamError> {
        let mut owned = Vec::new();
        for pair in self.store.get_prefix(keys::TENANT_PREFIX).await? {
            owned.extend(keys::split_ips(&pair.value));
        }
        Ok(owned)
    }

    /// Releases a held lock, logging rather than failing when the store
    /// refuses: the mutation outcome is already decided at that point.
    pub(crate) async fn release_lock(&self, name: &str, handle: LockHandle) {
        if let Err(e) = self.store.unlock(handle).await {
            warn!("Failed to release lock {}: {}", name, e);
        }
    }
}
