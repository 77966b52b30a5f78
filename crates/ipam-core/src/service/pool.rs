//! Tenant pool operations: reserve, release, read.

use super::StaticIpService;
use crate::error::IpamError;
use crate::keys;
use crate::range::expand_range;
use tracing::{debug, info};

impl StaticIpService {
    /// Reads `tenant`'s owned-address pool. Absence is a normal outcome.
    pub async fn tenant_pool(&self, tenant: &str) -> Result<Option<Vec<String>>, IpamError> {
        let value = self.store.get(&keys::tenant_pool_key(tenant)).await?;
        Ok(value.map(|v| keys::split_ips(&v)))
    }

    /// Reserves the inclusive `start`..`end` range for `tenant`.
    ///
    /// The requested range must not intersect any tenant's existing pool.
    /// Uniqueness is checked against the global union, not per tenant, and
    /// the union is an unlocked snapshot: a reservation racing past it can
    /// leave duplicates in a pool.
    pub async fn reserve_range(
        &self,
        tenant: &str,
        start: &str,
        end: &str,
    ) -> Result<(), IpamError> {
        let requested: Vec<String> = expand_range(start, end)?
            .iter()
            .map(ToString::to_string)
            .collect();

        let owned = self.global_owned().await?;
        let duplicates: Vec<&String> = requested
            .iter()
            .filter(|&ip| owned.contains(ip))
            .collect();
        if !duplicates.is_empty() {
            debug!("Reservation {}-{} overlaps existing pools: {:?}", start, end, duplicates);
            return Err(IpamError::AlreadyExists(format!(
                "{} of {} requested addresses already reserved",
                duplicates.len(),
                requested.len()
            )));
        }

        let key = keys::tenant_pool_key(tenant);
        let lock_name = keys::tenant_pool_lock(tenant);
        let lock = self.store.lock(&lock_name).await?;
        let result = async {
            let mut pool = match self.store.get(&key).await? {
                Some(value) => keys::split_ips(&value),
                None => Vec::new(),
            };
            pool.extend(requested.iter().cloned());
            self.store.put(&key, &keys::join_ips(&pool)).await?;
            Ok(())
        }
        .await;
        self.release_lock(&lock_name, lock).await;

        if result.is_ok() {
            info!("Reserved {} addresses ({}-{}) for tenant {}", requested.len(), start, end, tenant);
        }
        result
    }

    /// Releases `addresses` from `tenant`'s pool.
    ///
    /// Every requested address must exist somewhere in the global union, and
    /// at least one must belong to the named tenant. Releasing the last
    /// address deletes the tenant's key outright.
    pub async fn release_addresses(
        &self,
        tenant: &str,
        addresses: &[String],
    ) -> Result<(), IpamError> {
        let owned = self.global_owned().await?;
        if !addresses.iter().any(|ip| owned.contains(ip)) {
            return Err(IpamError::NotExist(format!(
                "none of the {} addresses are reserved",
                addresses.len()
            )));
        }

        let key = keys::tenant_pool_key(tenant);
        let pool = match self.store.get(&key).await? {
            Some(value) => keys::split_ips(&value),
            None => return Err(IpamError::NotBelongToTenant(tenant.to_string())),
        };
        if !addresses.iter().any(|ip| pool.contains(ip)) {
            return Err(IpamError::NotBelongToTenant(tenant.to_string()));
        }

        let lock_name = keys::tenant_pool_lock(tenant);
        let lock = self.store.lock(&lock_name).await?;
        let result = async {
            // Re-read under the lock; the pre-lock read was only validation.
            let pool = match self.store.get(&key).await? {
                Some(value) => keys::split_ips(&value),
                None => return Err(IpamError::NotBelongToTenant(tenant.to_string())),
            };
            let remaining: Vec<String> = pool
                .into_iter()
                .filter(|ip| !addresses.contains(ip))
                .collect();
            if remaining.is_empty() {
                self.store.delete(&key).await?;
                info!("Released last addresses of tenant {}, pool removed", tenant);
            } else {
                self.store.put(&key, &keys::join_ips(&remaining)).await?;
                info!("Released {} addresses from tenant {}, {} remain", addresses.len(), tenant, remaining.len());
            }
            Ok(())
        }
        .await;
        self.release_lock(&lock_name, lock).await;
        result
    }
}
