//! Key-space layout and value codec.
//!
//! Three disjoint prefixes, preserved for compatibility with existing
//! deployments:
//!
//! - `/anchor/user/<tenant>` — the tenant's owned-address pool
//! - `/anchor/ips/<...>` — workload assignment records, written externally
//! - `/anchor/gw/<subnet>` — subnet/gateway registrations
//!
//! Pool and gateway values are flat comma-joined strings; [`join_ips`] and
//! [`split_ips`] are the single encode/decode pair for the list form.
//!
//! Lock names derive from the mutated resource so unrelated tenants never
//! serialize on each other, while every path that mutates the same record
//! takes the same lock.

/// Prefix for per-tenant owned-address pools.
pub const TENANT_PREFIX: &str = "/anchor/user/";

/// Prefix for externally written workload assignment records.
pub const IP_RECORD_PREFIX: &str = "/anchor/ips/";

/// Prefix for subnet/gateway registrations.
pub const GATEWAY_PREFIX: &str = "/anchor/gw/";

/// Key holding `tenant`'s owned-address pool.
pub fn tenant_pool_key(tenant: &str) -> String {
    format!("{}{}", TENANT_PREFIX, tenant)
}

/// Key holding the gateway registration for `subnet`.
pub fn gateway_key(subnet: &str) -> String {
    format!("{}{}", GATEWAY_PREFIX, subnet)
}

/// Lock name for all mutations of `tenant`'s pool (adds and removes alike).
pub fn tenant_pool_lock(tenant: &str) -> String {
    format!("/anchor/lock/user/{}", tenant)
}

/// Lock name for all mutations of `subnet`'s registration.
pub fn gateway_lock(subnet: &str) -> String {
    format!("/anchor/lock/gw/{}", subnet)
}

/// Encodes an address list as its stored comma-joined form.
pub fn join_ips(ips: &[String]) -> String {
    ips.join(",")
}

/// Decodes a stored comma-joined address list.
///
/// Empty segments are dropped, so values written by older builds with a
/// trailing separator decode cleanly.
pub fn split_ips(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
