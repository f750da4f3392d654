use std::time::Duration;

use fred::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

use crate::server::cache::Cache;

/// Redis/Valkey-backed cache over a shared connection pool.
///
/// Every failure is logged and swallowed here; callers only ever observe
/// misses.
#[derive(Clone)]
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

impl Cache for RedisCache {
    fn is_ready(&self) -> bool {
        self.pool.is_connected()
    }

    async fn try_get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.pool.get::<Option<String>, _>(key).await {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!("Cache read for {} failed: {}", key, err);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                // Undecodable entries are stale schema leftovers; treat as a miss.
                tracing::warn!("Discarding undecodable cache entry {}: {}", key, err);
                None
            }
        }
    }

    async fn set<T: Serialize + Sync>(&self, key: &str, value: &T, ttl: Duration) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Failed to encode cache entry {}: {}", key, err);
                return;
            }
        };

        if let Err(err) = self
            .pool
            .set::<(), _, _>(
                key,
                raw,
                Some(Expiration::EX(ttl.as_secs() as i64)),
                None,
                false,
            )
            .await
        {
            tracing::warn!("Cache write for {} failed: {}", key, err);
        }
    }

    async fn invalidate(&self, keys: &[String]) {
        if keys.is_empty() {
            return;
        }

        if let Err(err) = self.pool.del::<i64, _>(keys.to_vec()).await {
            tracing::warn!("Cache invalidation for {:?} failed: {}", keys, err);
        }
    }
}
