//! String key/value storage backends for the content cache
//!
//! [`FileStorage`] persists each key as a file in the per-user cache directory
//! and survives restarts. [`MemoryStorage`] keeps everything in a map and is
//! used when no cache directory is available, and in tests.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use thiserror::Error;

/// Errors raised by cache storage and entry decoding
#[derive(Debug, Error)]
pub enum CacheError {
    /// Reading or writing the backing store failed
    #[error("Cache storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Entry could not be encoded or decoded
    #[error("Cache entry is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing store cannot be used
    #[error("Cache storage unavailable: {0}")]
    Unavailable(String),

    /// Entry claims to have been stored after the time of reading
    #[error("Cache entry timestamp {stored_at} is later than now ({now})")]
    FutureTimestamp { stored_at: i64, now: i64 },

    /// Entry age cannot be computed from its timestamp
    #[error("Cache entry timestamp {stored_at} is out of range")]
    TimestampOutOfRange { stored_at: i64 },
}

/// Generic string storage used as the cache's persistence substrate
///
/// Implementations must tolerate concurrent calls; for a given key the last
/// completed `set` wins.
pub trait KeyValueStorage: Send + Sync + fmt::Debug {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
    fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// Distinguishes temp files written concurrently by the same process
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stores each key as `<key>.json` inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory where cache files are stored
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a FileStorage in the XDG-compliant cache directory
    ///
    /// Uses `~/.cache/allhat/` on Linux, or the platform equivalent.
    /// Returns `None` if no home directory can be determined.
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "allhat")?;
        Some(Self::with_dir(project_dirs.cache_dir().to_path_buf()))
    }

    /// Creates a FileStorage rooted at a custom directory
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes through a temp file and renames it into place so readers never
    /// observe a partially written entry
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;

        let temp = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            key,
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        fs::write(&temp, value)?;
        if let Err(e) = fs::rename(&temp, self.path_for(key)) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process storage; contents are lost on exit
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::Unavailable("memory storage lock poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let storage = FileStorage::with_dir(temp_dir.path().to_path_buf());
        (storage, temp_dir)
    }

    #[test]
    fn test_file_set_creates_file_in_directory() {
        let (storage, temp_dir) = create_test_storage();

        storage.set("wp_designs", "{\"a\":1}").expect("Set should succeed");

        let expected_path = temp_dir.path().join("wp_designs.json");
        assert!(expected_path.exists(), "Cache file should exist");
        assert_eq!(fs::read_to_string(expected_path).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_file_get_missing_key_is_none() {
        let (storage, _temp_dir) = create_test_storage();
        assert!(storage.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_file_set_creates_directory_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("nested").join("cache");
        let storage = FileStorage::with_dir(nested.clone());

        storage.set("wp_home", "x").expect("Set should succeed");

        assert!(nested.join("wp_home.json").exists());
    }

    #[test]
    fn test_file_overwrite_and_remove() {
        let (storage, _temp_dir) = create_test_storage();

        storage.set("k", "first").unwrap();
        storage.set("k", "second").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("second"));

        storage.remove("k").unwrap();
        assert!(storage.get("k").unwrap().is_none());

        // Removing again is not an error
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_file_set_leaves_no_temp_files() {
        let (storage, temp_dir) = create_test_storage();
        storage.set("wp_about", "{}").unwrap();

        let names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["wp_about.json".to_string()]);
    }

    #[test]
    fn test_file_set_fails_when_directory_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();

        let storage = FileStorage::with_dir(blocker);
        assert!(storage.set("k", "v").is_err());
    }

    #[test]
    fn test_file_concurrent_writes_last_one_wins_without_corruption() {
        let (storage, _temp_dir) = create_test_storage();
        let storage = Arc::new(storage);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    let value = format!("{{\"writer\":{}}}", i);
                    for _ in 0..20 {
                        storage.set("shared", &value).unwrap();
                        let read = storage.get("shared").unwrap().unwrap();
                        assert!(read.starts_with("{\"writer\":"), "torn read: {}", read);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let final_value = storage.get("shared").unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&final_value).unwrap();
        assert!(parsed["writer"].as_u64().unwrap() < 8);
    }

    #[test]
    fn test_new_creates_xdg_compliant_path() {
        if let Some(storage) = FileStorage::new() {
            let path_str = storage.dir().to_string_lossy();
            assert!(path_str.contains("allhat"), "Cache path should contain project name");
        }
        // Passes if new() returns None (e.g., no home directory in CI)
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();

        assert!(storage.get("k").unwrap().is_none());
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        storage.remove("k").unwrap();
        assert!(storage.get("k").unwrap().is_none());
    }
}
