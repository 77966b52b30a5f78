//! etcd v3 Gateway Key-Value Client
//!
//! A thin client for the etcd v3 JSON gateway, providing the key-value
//! contract the Anchor IPAM core runs on: point reads, prefix scans, puts,
//! deletes, and named mutual-exclusion locks backed by leases.
//!
//! # Example
//!
//! ```no_run
//! use etcd_store::{EtcdClient, EtcdConfig, KvStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EtcdClient::new(&EtcdConfig::from_env())?;
//!
//! // Read a tenant pool
//! let pool = client.get("/anchor/user/team-a").await?;
//!
//! // Mutate under a named lock
//! let lock = client.lock("/anchor/lock/user/team-a").await?;
//! client.put("/anchor/user/team-a", "10.0.0.1,10.0.0.2").await?;
//! client.unlock(lock).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`test-util`**: enables [`MemoryStore`], an in-memory mock with real
//!   per-name lock exclusion for unit tests.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod kv_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::EtcdClient;
pub use config::EtcdConfig;
pub use error::StoreError;
pub use kv_trait::KvStore;
pub use models::{KvPair, LockHandle};
#[cfg(feature = "test-util")]
pub use mock::MemoryStore;
