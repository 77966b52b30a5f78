//! Tenant-directory collaborator.
//!
//! Visibility for non-admin listings is resolved by the platform's account
//! service; this core only sees the result through the trait below.

use crate::error::IpamError;

/// Resolves the tenant names visible to the current caller.
#[async_trait::async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Tenant names the caller may see. Admin callers bypass this entirely.
    async fn visible_tenants(&self) -> Result<Vec<String>, IpamError>;
}

/// Directory with a fixed visible set, for tests and single-tenant setups.
#[derive(Debug, Clone, Default)]
pub struct FixedTenantDirectory {
    tenants: Vec<String>,
}

impl FixedTenantDirectory {
    /// Creates a directory always returning `tenants`.
    pub fn new(tenants: Vec<String>) -> Self {
        Self { tenants }
    }
}

#[async_trait::async_trait]
impl TenantDirectory for FixedTenantDirectory {
    async fn visible_tenants(&self) -> Result<Vec<String>, IpamError> {
        Ok(self.tenants.clone())
    }
}
