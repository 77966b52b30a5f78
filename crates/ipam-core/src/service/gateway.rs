//! Subnet/gateway registration.
//!
//! Each registered subnet is either absent or registered, nothing in
//! between: `register_gateway` is the only absent-to-registered transition
//! and `unregister_gateway` the only inverse.

use super::StaticIpService;
use crate::error::IpamError;
use crate::keys;
use crate::models::SubnetGateway;
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;
use tracing::info;

impl StaticIpService {
    /// Every registered subnet/gateway pair; empty or malformed entries are
    /// skipped.
    pub async fn list_gateways(&self) -> Result<Vec<SubnetGateway>, IpamError> {
        let pairs = self.store.get_prefix(keys::GATEWAY_PREFIX).await?;
        Ok(pairs
            .iter()
            .filter_map(|pair| SubnetGateway::decode(&pair.value))
            .collect())
    }

    /// The currently registered subnets, in canonical form.
    async fn registered_subnets(&self) -> Result<Vec<String>, IpamError> {
        Ok(self
            .list_gateways()
            .await?
            .into_iter()
            .map(|entry| entry.subnet)
            .collect())
    }

    /// Registers `gateway` as the default route for `subnet`.
    ///
    /// The subnet must parse as a network without host bits set, must not be
    /// registered already, and must contain the gateway address. Returns the
    /// canonical pair as stored.
    pub async fn register_gateway(
        &self,
        subnet: &str,
        gateway: &str,
    ) -> Result<SubnetGateway, IpamError> {
        let net: Ipv4Net = subnet
            .trim()
            .parse()
            .map_err(|_| IpamError::Format(subnet.to_string()))?;
        if net.addr() != net.network() {
            // Host bits set, e.g. 10.0.0.1/24: a strict network parse fails.
            return Err(IpamError::Format(subnet.to_string()));
        }
        let gw: Ipv4Addr = gateway
            .trim()
            .parse()
            .map_err(|_| IpamError::Format(gateway.to_string()))?;

        let canonical = net.to_string();
        if self.registered_subnets().await?.contains(&canonical) {
            return Err(IpamError::AlreadyExists(canonical));
        }
        if !net.contains(&gw) {
            return Err(IpamError::NotInSubnet {
                gateway: gw.to_string(),
                subnet: canonical,
            });
        }

        let entry = SubnetGateway {
            subnet: canonical.clone(),
            gateway: gw.to_string(),
        };
        let lock_name = keys::gateway_lock(&canonical);
        let lock = self.store.lock(&lock_name).await?;
        let result = self
            .store
            .put(&keys::gateway_key(&canonical), &entry.encode())
            .await;
        self.release_lock(&lock_name, lock).await;
        result?;

        info!("Registered gateway {} for subnet {}", entry.gateway, entry.subnet);
        Ok(entry)
    }

    /// Removes the registration for `subnet`; returns the removed subnet.
    pub async fn unregister_gateway(&self, subnet: &str) -> Result<String, IpamError> {
        let registered = self.registered_subnets().await?;
        if registered.is_empty() || !registered.iter().any(|s| s == subnet) {
            return Err(IpamError::NotExist(subnet.to_string()));
        }

        let lock_name = keys::gateway_lock(subnet);
        let lock = self.store.lock(&lock_name).await?;
        let result = self.store.delete(&keys::gateway_key(subnet)).await;
        self.release_lock(&lock_name, lock).await;
        result?;

        info!("Unregistered gateway for subnet {}", subnet);
        Ok(subnet.to_string())
    }
}
