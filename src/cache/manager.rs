//! Timestamped content cache
//!
//! Provides a `CacheStore` that keeps normalized content per category as
//! `{ "data": ..., "timestamp": <epoch millis> }` JSON in a [`KeyValueStorage`].
//! Reads never fail: missing, corrupt or expired entries are all misses, and
//! expired or corrupt entries are deleted when they are read.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;

use super::storage::{CacheError, FileStorage, KeyValueStorage, MemoryStorage};
use crate::config::CacheSettings;
use crate::content::ContentCategory;

/// Wrapper struct for cached data in storage
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// The cached data
    data: T,
    /// When the data was cached, in milliseconds since the Unix epoch
    timestamp: i64,
}

/// Outcome of looking up an entry
enum Lookup<T> {
    Fresh(T),
    Missing,
    Expired,
}

/// Best-effort cache of normalized content, keyed by category
///
/// Constructed once per process and shared by cloning; clones use the same
/// backing storage.
#[derive(Debug, Clone)]
pub struct CacheStore {
    storage: Arc<dyn KeyValueStorage>,
    settings: CacheSettings,
}

impl CacheStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, settings: CacheSettings) -> Self {
        Self { storage, settings }
    }

    /// Creates a CacheStore backed by files in the XDG cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined.
    pub fn open_default(settings: CacheSettings) -> Option<Self> {
        FileStorage::new().map(|storage| Self::new(Arc::new(storage), settings))
    }

    /// Creates a CacheStore that lives only as long as the process
    pub fn in_memory(settings: CacheSettings) -> Self {
        Self::new(Arc::new(MemoryStorage::new()), settings)
    }

    pub fn settings(&self) -> CacheSettings {
        self.settings
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    /// Reads fresh cached content for a category
    pub fn get<T: DeserializeOwned>(&self, category: ContentCategory) -> Option<T> {
        self.get_at(category, Utc::now())
    }

    /// Reads cached content as of `now`
    ///
    /// Returns `None` when caching is disabled, or the entry is missing,
    /// unreadable, stamped in the future, or older than the configured TTL.
    pub fn get_at<T: DeserializeOwned>(
        &self,
        category: ContentCategory,
        now: DateTime<Utc>,
    ) -> Option<T> {
        if !self.settings.enabled {
            return None;
        }

        let key = category.cache_key();
        match self.lookup(key, now) {
            Ok(Lookup::Fresh(data)) => {
                tracing::debug!(%category, "cache hit");
                Some(data)
            }
            Ok(Lookup::Missing) => {
                tracing::debug!(%category, "cache miss");
                None
            }
            Ok(Lookup::Expired) => {
                tracing::debug!(%category, "cache entry expired");
                self.discard(key);
                None
            }
            Err(error) => {
                tracing::warn!(%category, %error, "discarding unreadable cache entry");
                self.discard(key);
                None
            }
        }
    }

    /// Stores content for a category, stamped with the current time
    pub fn put<T: Serialize>(&self, category: ContentCategory, data: &T) {
        self.put_at(category, data, Utc::now());
    }

    /// Stores content stamped with `now`; failures are logged and dropped
    pub fn put_at<T: Serialize>(&self, category: ContentCategory, data: &T, now: DateTime<Utc>) {
        if !self.settings.enabled {
            return;
        }

        if let Err(error) = self.write(category.cache_key(), data, now) {
            tracing::warn!(%category, %error, "failed to save content to cache");
        }
    }

    /// Drops the cached entry for one category
    pub fn invalidate(&self, category: ContentCategory) {
        self.discard(category.cache_key());
    }

    /// Drops every cached category
    pub fn clear(&self) {
        for category in ContentCategory::ALL {
            self.invalidate(category);
        }
    }

    fn lookup<T: DeserializeOwned>(
        &self,
        key: &str,
        now: DateTime<Utc>,
    ) -> Result<Lookup<T>, CacheError> {
        let Some(raw) = self.storage.get(key)? else {
            return Ok(Lookup::Missing);
        };

        let entry: CacheEntry<T> = serde_json::from_str(&raw)?;
        let now_ms = now.timestamp_millis();
        let Some(age) = now_ms.checked_sub(entry.timestamp) else {
            return Err(CacheError::TimestampOutOfRange {
                stored_at: entry.timestamp,
            });
        };

        if age < 0 {
            return Err(CacheError::FutureTimestamp {
                stored_at: entry.timestamp,
                now: now_ms,
            });
        }
        if age > self.settings.ttl_millis() {
            return Ok(Lookup::Expired);
        }

        Ok(Lookup::Fresh(entry.data))
    }

    fn write<T: Serialize>(&self, key: &str, data: &T, now: DateTime<Utc>) -> Result<(), CacheError> {
        let entry = CacheEntry {
            data,
            timestamp: now.timestamp_millis(),
        };
        let json = serde_json::to_string(&entry)?;
        self.storage.set(key, &json)
    }

    fn discard(&self, key: &str) {
        if let Err(error) = self.storage.remove(key) {
            tracing::warn!(key, %error, "failed to remove cache entry");
        }
    }
}
