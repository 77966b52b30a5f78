//! Anchor IPAM bookkeeping engine
//!
//! Tracks, per tenant, a pool of statically reserved IPv4 addresses, which
//! of those are currently bound to running workloads, and the subnet/gateway
//! pairs available for allocation. All persisted state lives in an etcd-like
//! key-value store reached through the [`etcd_store::KvStore`] contract;
//! mutations serialize on per-resource named locks.
//!
//! # Example
//!
//! ```no_run
//! use etcd_store::{EtcdClient, EtcdConfig};
//! use ipam_core::{AddressSelection, FixedTenantDirectory, StaticIpService};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(EtcdClient::new(&EtcdConfig::from_env())?);
//! let directory = Arc::new(FixedTenantDirectory::new(vec!["team-a".to_string()]));
//! let service = StaticIpService::new(store, directory);
//!
//! // Reserve a range for a tenant, then see what is still unbound.
//! service.reserve_range("team-a", "10.0.0.1", "10.0.0.16").await?;
//! let unused = service
//!     .tenant_addresses("team-a", AddressSelection::Unused)
//!     .await?;
//! println!("{} addresses free", unused.len());
//! # Ok(())
//! # }
//! ```
//!
//! The HTTP surface, caller authentication, and the writer of individual
//! IP-to-workload assignment records are all external collaborators; this
//! crate only implements the bookkeeping underneath them.

pub mod directory;
pub mod error;
pub mod keys;
pub mod models;
pub mod range;
pub mod service;
#[cfg(test)]
mod test_utils;

pub use directory::{FixedTenantDirectory, TenantDirectory};
pub use error::IpamError;
pub use models::{AssignmentRecord, SubnetGateway};
pub use range::expand_range;
pub use service::StaticIpService;
pub use service::assignments::AddressSelection;
