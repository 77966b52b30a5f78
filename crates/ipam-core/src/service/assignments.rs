//! Assignment-record reads: in-use/unused computation and listings.
//!
//! Assignment records are written by the workload-scheduling path; this core
//! only scans them. Values that do not decode to exactly five fields are
//! skipped everywhere as forward-compatible tolerance, never errors.

use super::StaticIpService;
use crate::error::IpamError;
use crate::keys;
use crate::models::AssignmentRecord;
use tracing::debug;

/// Which slice of a tenant's pool a listing returns.
///
/// Built from the caller's two flags; `unused` wins when both are set and
/// the in-use view is the default when neither is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressSelection {
    /// Every owned address, bound or not.
    All,
    /// Addresses currently bound to a workload.
    #[default]
    InUse,
    /// Owned addresses with no assignment record.
    Unused,
}

impl AddressSelection {
    /// Maps the API layer's `All`/`Unuse` flag pair to a selection.
    pub fn from_flags(all: bool, unused: bool) -> Self {
        if unused {
            AddressSelection::Unused
        } else if all {
            AddressSelection::All
        } else {
            AddressSelection::InUse
        }
    }
}

impl StaticIpService {
    /// Every well-formed assignment record, across all tenants (admin view).
    pub async fn list_all_assignments(&self) -> Result<Vec<AssignmentRecord>, IpamError> {
        let pairs = self.store.get_prefix(keys::IP_RECORD_PREFIX).await?;
        Ok(pairs
            .iter()
            .filter_map(|pair| AssignmentRecord::decode(&pair.value))
            .collect())
    }

    /// Well-formed assignment records belonging to the given tenants.
    pub async fn list_assignments_for(
        &self,
        tenant_names: &[String],
    ) -> Result<Vec<AssignmentRecord>, IpamError> {
        let all = self.list_all_assignments().await?;
        Ok(all
            .into_iter()
            .filter(|record| tenant_names.contains(&record.tenant_name))
            .collect())
    }

    /// Non-admin view: records restricted to the tenants visible to the
    /// current caller, per the tenant directory.
    pub async fn list_visible_assignments(&self) -> Result<Vec<AssignmentRecord>, IpamError> {
        let visible = self.directory.visible_tenants().await?;
        debug!("Listing assignments for {} visible tenants", visible.len());
        self.list_assignments_for(&visible).await
    }

    /// Addresses of `tenant` currently bound to a workload.
    pub async fn in_use(&self, tenant: &str) -> Result<Vec<String>, IpamError> {
        let pairs = self.store.get_prefix(keys::IP_RECORD_PREFIX).await?;
        Ok(pairs
            .iter()
            .filter_map(|pair| AssignmentRecord::decode(&pair.value))
            .filter(|record| record.tenant_name == tenant)
            .map(|record| record.static_ip)
            .collect())
    }

    /// Owned addresses of `tenant` with no assignment record.
    ///
    /// Fails with `NotExist` when the tenant has no pool at all.
    pub async fn unused(&self, tenant: &str) -> Result<Vec<String>, IpamError> {
        let pool = self
            .tenant_pool(tenant)
            .await?
            .ok_or_else(|| IpamError::NotExist(tenant.to_string()))?;
        let in_use = self.in_use(tenant).await?;

        let mut seen = Vec::new();
        for ip in pool {
            if !in_use.contains(&ip) && !seen.contains(&ip) {
                seen.push(ip);
            }
        }
        Ok(seen)
    }

    /// Tenant-scoped address listing, dispatched on the caller's selection.
    pub async fn tenant_addresses(
        &self,
        tenant: &str,
        selection: AddressSelection,
    ) -> Result<Vec<String>, IpamError> {
        match selection {
            AddressSelection::All => self
                .tenant_pool(tenant)
                .await?
                .ok_or_else(|| IpamError::NotExist(tenant.to_string())),
            AddressSelection::InUse => self.in_use(tenant).await,
            AddressSelection::Unused => self.unused(tenant).await,
        }
    }
}
