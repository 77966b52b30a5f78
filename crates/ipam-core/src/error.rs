//! Engine error types.
//!
//! Every domain failure is a synchronous validation failure surfaced before
//! any write happens; only [`IpamError::Store`] reflects a collaborator
//! fault. Each variant carries a stable machine-readable id for the external
//! API layer.

use etcd_store::StoreError;
use thiserror::Error;

/// Errors produced by the bookkeeping engine.
#[derive(Debug, Error)]
pub enum IpamError {
    /// Malformed IP address or subnet literal
    #[error("Invalid address or subnet: {0}")]
    Format(String),

    /// Bulk range spans more than one /24-equivalent block
    #[error("Range {start}-{end} spans more than one subnet block")]
    RangeTooLarge {
        /// Requested start address
        start: String,
        /// Requested end address
        end: String,
    },

    /// Bulk range start is numerically after its end
    #[error("Range start {start} is after end {end}")]
    RangeOrder {
        /// Requested start address
        start: String,
        /// Requested end address
        end: String,
    },

    /// Address already reserved, or subnet already registered
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Target tenant pool, address set, or subnet not found
    #[error("Not found: {0}")]
    NotExist(String),

    /// Release requested for addresses the tenant does not own
    #[error("Addresses do not belong to tenant {0}")]
    NotBelongToTenant(String),

    /// Gateway address outside the claimed subnet
    #[error("Gateway {gateway} is not inside subnet {subnet}")]
    NotInSubnet {
        /// Proposed gateway address
        gateway: String,
        /// Claimed subnet
        subnet: String,
    },

    /// Underlying store call failed or timed out
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IpamError {
    /// Stable error id, part of the wire contract with the API layer.
    pub fn error_id(&self) -> &'static str {
        match self {
            IpamError::Format(_) => "static_ip_format_error",
            IpamError::RangeTooLarge { .. } => "static_ip_range_too_big",
            IpamError::RangeOrder { .. } => "static_ip_range_err",
            IpamError::AlreadyExists(_) => "static_ip_already_exist_error",
            IpamError::NotExist(_) => "static_ip_not_exist_error",
            IpamError::NotBelongToTenant(_) => "static_ip_not_belong_to_tenant",
            IpamError::NotInSubnet { .. } => "sip_ip_gateway_not_in_subnet_error",
            IpamError::Store(_) => "store_unavailable_error",
        }
    }
}
