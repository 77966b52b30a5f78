//! Store client configuration

use std::env;
use std::time::Duration;

/// Connection settings for the etcd gateway, read from the environment.
#[derive(Debug, Clone)]
pub struct EtcdConfig {
    /// Base URL of the etcd v3 JSON gateway, e.g. `http://etcd:2379`.
    pub endpoint: String,
    /// TTL for the lease backing each named lock. A crashed holder loses
    /// the lock when the lease expires.
    pub lock_ttl: Duration,
}

impl EtcdConfig {
    /// Loads configuration from `ETCD_ENDPOINT` and `ETCD_LOCK_TTL_SECS`,
    /// falling back to defaults suitable for in-cluster deployment.
    pub fn from_env() -> Self {
        let endpoint =
            env::var("ETCD_ENDPOINT").unwrap_or_else(|_| "http://127.0.0.1:2379".to_string());
        let lock_ttl = env::var("ETCD_LOCK_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map_or(Duration::from_secs(30), Duration::from_secs);
        Self { endpoint, lock_ttl }
    }
}

impl Default for EtcdConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:2379".to_string(),
            lock_ttl: Duration::from_secs(30),
        }
    }
}
