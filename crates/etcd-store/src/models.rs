//! Wire models for the etcd v3 JSON gateway
//!
//! The gateway base64-encodes every key and value; the request/response
//! structs here carry the encoded form, decoding happens in the client.

use serde::{Deserialize, Serialize};

/// A decoded key/value pair returned by a range read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvPair {
    /// Full key, UTF-8 decoded.
    pub key: String,
    /// Value, UTF-8 decoded.
    pub value: String,
}

/// Handle for a held named lock.
///
/// Carries the ownership key returned by the lock service and the lease
/// backing it, so release always targets this exact acquisition.
#[derive(Debug, Clone)]
pub struct LockHandle {
    /// Ownership key returned by `/v3/lock/lock`, base64 form.
    pub(crate) key_b64: String,
    /// Lease the lock is attached to.
    pub(crate) lease_id: String,
}

impl LockHandle {
    /// Builds a handle from raw gateway fields. Exposed for mock stores.
    pub fn new(key_b64: impl Into<String>, lease_id: impl Into<String>) -> Self {
        Self {
            key_b64: key_b64.into(),
            lease_id: lease_id.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RangeRequest {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RangeResponse {
    #[serde(default)]
    pub kvs: Vec<KeyValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KeyValue {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PutRequest {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteRangeRequest {
    pub key: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeaseGrantRequest {
    #[serde(rename = "TTL")]
    pub ttl: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LeaseGrantResponse {
    #[serde(rename = "ID")]
    pub id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeaseRevokeRequest {
    #[serde(rename = "ID")]
    pub id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LockRequest {
    pub name: String,
    pub lease: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LockResponse {
    pub key: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct UnlockRequest {
    pub key: String,
}
