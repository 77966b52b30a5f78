//! Shared helpers for unit tests.

use crate::directory::FixedTenantDirectory;
use crate::service::StaticIpService;
use etcd_store::MemoryStore;
use std::sync::Arc;

/// Service over a fresh in-memory store with no visible tenants.
pub(crate) fn test_service() -> (Arc<MemoryStore>, StaticIpService) {
    test_service_with_visible(&[])
}

/// Service over a fresh in-memory store whose directory reports `visible`.
pub(crate) fn test_service_with_visible(visible: &[&str]) -> (Arc<MemoryStore>, StaticIpService) {
    let store = Arc::new(MemoryStore::new());
    let directory = Arc::new(FixedTenantDirectory::new(
        visible.iter().map(|s| (*s).to_string()).collect(),
    ));
    let service = StaticIpService::new(store.clone(), directory);
    (store, service)
}

/// Seeds one assignment record the way the scheduling path writes them.
pub(crate) fn seed_assignment(store: &MemoryStore, ip: &str, pod: &str, tenant: &str) {
    store.seed(
        &format!("/anchor/ips/{}", ip),
        &format!("{},{},{},app-1,svc-1", ip, pod, tenant),
    );
}
