use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::server::cache::Cache;

/// In-memory [`Cache`] double.
///
/// Records every get/set/invalidate so tests can assert both what was
/// cached and that the cache was bypassed entirely while unavailable.
pub struct FakeCache {
    ready: AtomicBool,
    entries: Mutex<HashMap<String, String>>,
    get_keys: Mutex<Vec<String>>,
    set_keys: Mutex<Vec<String>>,
    invalidated_keys: Mutex<Vec<String>>,
}

impl FakeCache {
    /// A ready, empty cache.
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(true),
            entries: Mutex::new(HashMap::new()),
            get_keys: Mutex::new(Vec::new()),
            set_keys: Mutex::new(Vec::new()),
            invalidated_keys: Mutex::new(Vec::new()),
        }
    }

    /// A cache whose availability gate reports false.
    pub fn unavailable() -> Self {
        let cache = Self::new();
        cache.ready.store(false, Ordering::Relaxed);
        cache
    }

    /// Seeds an entry without recording a set call.
    pub fn seed<T: Serialize>(&self, key: &str, value: &T) {
        let raw = serde_json::to_string(value).unwrap();
        self.entries.lock().unwrap().insert(key.to_string(), raw);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn get_keys(&self) -> Vec<String> {
        self.get_keys.lock().unwrap().clone()
    }

    pub fn set_keys(&self) -> Vec<String> {
        self.set_keys.lock().unwrap().clone()
    }

    pub fn invalidated_keys(&self) -> Vec<String> {
        self.invalidated_keys.lock().unwrap().clone()
    }
}

impl Cache for FakeCache {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    async fn try_get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_keys.lock().unwrap().push(key.to_string());

        let entries = self.entries.lock().unwrap();
        let raw = entries.get(key)?;

        serde_json::from_str(raw).ok()
    }

    async fn set<T: Serialize + Sync>(&self, key: &str, value: &T, _ttl: Duration) {
        self.set_keys.lock().unwrap().push(key.to_string());

        if let Ok(raw) = serde_json::to_string(value) {
            self.entries.lock().unwrap().insert(key.to_string(), raw);
        }
    }

    async fn invalidate(&self, keys: &[String]) {
        let mut entries = self.entries.lock().unwrap();
        let mut invalidated = self.invalidated_keys.lock().unwrap();

        for key in keys {
            entries.remove(key);
            invalidated.push(key.clone());
        }
    }
}
