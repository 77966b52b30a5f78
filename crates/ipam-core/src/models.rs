//! View models returned to the external API layer.
//!
//! Serialized field casing matches the original wire contract (PascalCase).

use serde::Serialize;

/// One workload assignment record, written by the scheduling path and
/// read-only to this core.
///
/// Stored as the fixed 5-field comma-joined string
/// `ip,pod_name,tenant_name,app_name,service_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignmentRecord {
    /// Assigned address.
    pub static_ip: String,
    /// Pod the address is bound to.
    pub pod_name: String,
    /// Owning tenant.
    pub tenant_name: String,
    /// Application the pod belongs to.
    pub app_name: String,
    /// Service the pod belongs to.
    pub service_name: String,
}

impl AssignmentRecord {
    /// Decodes a stored record value.
    ///
    /// Returns `None` unless the value splits into exactly five fields;
    /// malformed or partial entries are skipped by every caller rather than
    /// treated as failures.
    pub fn decode(value: &str) -> Option<Self> {
        let fields: Vec<&str> = value.split(',').collect();
        let [ip, pod, tenant, app, service] = fields.as_slice() else {
            return None;
        };
        Some(Self {
            static_ip: (*ip).to_string(),
            pod_name: (*pod).to_string(),
            tenant_name: (*tenant).to_string(),
            app_name: (*app).to_string(),
            service_name: (*service).to_string(),
        })
    }
}

/// One registered subnet/gateway pair, stored as `subnet,gateway`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubnetGateway {
    /// Registered CIDR network.
    pub subnet: String,
    /// Default-route address inside the subnet.
    pub gateway: String,
}

impl SubnetGateway {
    /// Decodes a stored registration value; `None` for empty or malformed
    /// entries, which list operations skip.
    pub fn decode(value: &str) -> Option<Self> {
        let (subnet, gateway) = value.split_once(',')?;
        if subnet.is_empty() || gateway.is_empty() {
            return None;
        }
        Some(Self {
            subnet: subnet.to_string(),
            gateway: gateway.to_string(),
        })
    }

    /// Encodes the stored `subnet,gateway` form.
    pub fn encode(&self) -> String {
        format!("{},{}", self.subnet, self.gateway)
    }
}
