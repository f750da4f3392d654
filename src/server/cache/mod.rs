//! Read-through / write-invalidate cache in front of the storage gateway.
//!
//! Cached values are disposable projections: any entry may vanish through
//! eviction or a restart without violating correctness, because the
//! database remains the source of truth. Consistency is bounded by a fixed
//! TTL for entries that survive an invalidation gap.

pub mod key;

mod redis;

pub use redis::RedisCache;

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

/// Lifetime of cached projections; bounds staleness, does not guarantee
/// freshness.
pub const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Cache port consulted by the domain services.
///
/// Implementations never surface backend failures: a failed read degrades
/// to a miss and writes/invalidations are best effort. Callers check
/// [`Cache::is_ready`] before every operation and bypass the cache
/// entirely while it reports unavailable.
#[allow(async_fn_in_trait)]
pub trait Cache {
    /// Whether the backend is usable right now.
    fn is_ready(&self) -> bool;

    /// Returns the decoded entry for `key`, or `None` on a miss, decode
    /// failure, or backend error.
    async fn try_get<T: DeserializeOwned>(&self, key: &str) -> Option<T>;

    /// Stores `value` under `key` for at most `ttl`.
    async fn set<T: Serialize + Sync>(&self, key: &str, value: &T, ttl: Duration);

    /// Deletes the given keys.
    async fn invalidate(&self, keys: &[String]);
}
