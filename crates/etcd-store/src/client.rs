//! etcd v3 JSON gateway client
//!
//! Talks to the gRPC-gateway endpoints etcd exposes over plain HTTP
//! (`/v3/kv/*`, `/v3/lease/*`, `/v3/lock/*`). The gateway base64-encodes
//! every key and value; encoding and decoding are confined to this module so
//! callers only ever see UTF-8 strings.

use crate::config::EtcdConfig;
use crate::error::StoreError;
use crate::kv_trait::KvStore;
use crate::models::*;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Client for a single etcd gateway endpoint.
#[derive(Debug, Clone)]
pub struct EtcdClient {
    client: Client,
    base_url: String,
    lock_ttl_secs: u64,
}

impl EtcdClient {
    /// Creates a client for the given configuration.
    pub fn new(config: &EtcdConfig) -> Result<Self, StoreError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            lock_ttl_secs: config.lock_ttl.as_secs().max(1),
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All gateway calls are POSTs with a JSON body.
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(StoreError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api(format!(
                "POST {} failed: {} - {}",
                path, status, body
            )));
        }

        response.json().await.map_err(StoreError::Http)
    }

    fn encode(raw: &str) -> String {
        B64.encode(raw.as_bytes())
    }

    fn decode(encoded: &str) -> Result<String, StoreError> {
        let bytes = B64
            .decode(encoded)
            .map_err(|e| StoreError::Decode(format!("invalid base64: {}", e)))?;
        String::from_utf8(bytes).map_err(|e| StoreError::Decode(format!("invalid UTF-8: {}", e)))
    }

    /// Computes the exclusive upper bound for a prefix scan, per the etcd
    /// range convention: the prefix with its last byte incremented.
    fn prefix_range_end(prefix: &str) -> Vec<u8> {
        let mut end = prefix.as_bytes().to_vec();
        while let Some(last) = end.pop() {
            if last < 0xff {
                end.push(last + 1);
                return end;
            }
        }
        // Empty or all-0xff prefix scans to the end of the key-space.
        vec![0]
    }

    async fn lease_grant(&self) -> Result<String, StoreError> {
        let response: LeaseGrantResponse = self
            .post(
                "/v3/lease/grant",
                &LeaseGrantRequest {
                    ttl: self.lock_ttl_secs.to_string(),
                },
            )
            .await?;
        Ok(response.id)
    }

    async fn lease_revoke(&self, lease_id: &str) -> Result<(), StoreError> {
        let _: serde_json::Value = self
            .post(
                "/v3/lease/revoke",
                &LeaseRevokeRequest {
                    id: lease_id.to_string(),
                },
            )
            .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl KvStore for EtcdClient {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let response: RangeResponse = self
            .post(
                "/v3/kv/range",
                &RangeRequest {
                    key: Self::encode(key),
                    range_end: None,
                    sort_order: None,
                },
            )
            .await?;

        match response.kvs.first() {
            Some(kv) => Ok(Some(Self::decode(&kv.value)?)),
            None => Ok(None),
        }
    }

    async fn get_prefix(&self, prefix: &str) -> Result<Vec<KvPair>, StoreError> {
        let range_end = Self::prefix_range_end(prefix);
        let response: RangeResponse = self
            .post(
                "/v3/kv/range",
                &RangeRequest {
                    key: Self::encode(prefix),
                    range_end: Some(B64.encode(&range_end)),
                    sort_order: Some("ASCEND".to_string()),
                },
            )
            .await?;

        let mut pairs = Vec::with_capacity(response.kvs.len());
        for kv in &response.kvs {
            pairs.push(KvPair {
                key: Self::decode(&kv.key)?,
                value: Self::decode(&kv.value)?,
            });
        }
        Ok(pairs)
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _: serde_json::Value = self
            .post(
                "/v3/kv/put",
                &PutRequest {
                    key: Self::encode(key),
                    value: Self::encode(value),
                },
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let _: serde_json::Value = self
            .post(
                "/v3/kv/deleterange",
                &DeleteRangeRequest {
                    key: Self::encode(key),
                },
            )
            .await?;
        Ok(())
    }

    async fn lock(&self, name: &str) -> Result<LockHandle, StoreError> {
        // The lock call blocks server-side until the lock is free; the lease
        // bounds how long a crashed holder can keep it.
        let lease_id = self.lease_grant().await?;
        let response: Result<LockResponse, StoreError> = self
            .post(
                "/v3/lock/lock",
                &LockRequest {
                    name: Self::encode(name),
                    lease: lease_id.clone(),
                },
            )
            .await;

        match response {
            Ok(lock) => {
                debug!("acquired lock {}", name);
                Ok(LockHandle::new(lock.key, lease_id))
            }
            Err(e) => {
                // Lock never acquired: don't leak the lease.
                let _ = self.lease_revoke(&lease_id).await;
                Err(StoreError::Lock(format!("lock {}: {}", name, e)))
            }
        }
    }

    async fn unlock(&self, handle: LockHandle) -> Result<(), StoreError> {
        let _: serde_json::Value = self
            .post(
                "/v3/lock/unlock",
                &UnlockRequest {
                    key: handle.key_b64.clone(),
                },
            )
            .await?;
        self.lease_revoke(&handle.lease_id).await
    }
}
