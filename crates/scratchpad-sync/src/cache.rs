use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistent slots holding document locators, one per tool
///
/// Reads never fail: a slot that cannot be read is treated as empty so the
/// caller falls back to creating a new document.
pub trait LocatorCache: Send + Sync {
    /// Read the locator stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store a locator under `key`, replacing any previous one
    fn set(&self, key: &str, locator: &str) -> io::Result<()>;

    /// Forget the locator stored under `key`
    fn clear(&self, key: &str) -> io::Result<()>;
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Locator slots kept in a small JSON file
#[derive(Debug)]
pub struct FileLocatorCache {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileLocatorCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `~/.scratchpad/locators.json`
    pub fn default_path() -> PathBuf {
        home_dir().join(".scratchpad").join("locators.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> BTreeMap<String, String> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(err) => {
                tracing::warn!("failed to read {}: {err}", self.path.display());
                return BTreeMap::new();
            }
        };

        serde_json::from_slice(&data).unwrap_or_else(|err| {
            tracing::warn!("failed to parse {}: {err}", self.path.display());
            BTreeMap::new()
        })
    }

    fn write_slots(&self, slots: &BTreeMap<String, String>) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let bytes = serde_json::to_vec_pretty(slots)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes)?;
        match fs::rename(&tmp_path, &self.path) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                if self.path.exists() {
                    fs::remove_file(&self.path)?;
                    fs::rename(&tmp_path, &self.path)
                } else {
                    Err(rename_err)
                }
            }
        }
    }
}

impl Default for FileLocatorCache {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl LocatorCache for FileLocatorCache {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read_slots().remove(key)
    }

    fn set(&self, key: &str, locator: &str) -> io::Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut slots = self.read_slots();
        slots.insert(key.to_string(), locator.to_string());
        self.write_slots(&slots)
    }

    fn clear(&self, key: &str) -> io::Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut slots = self.read_slots();
        if slots.remove(key).is_none() {
            return Ok(());
        }
        self.write_slots(&slots)
    }
}

/// Locator slots held in memory only
#[derive(Debug, Default)]
pub struct MemoryLocatorCache {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryLocatorCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocatorCache for MemoryLocatorCache {
    fn get(&self, key: &str) -> Option<String> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.get(key).cloned()
    }

    fn set(&self, key: &str, locator: &str) -> io::Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(key.to_string(), locator.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> io::Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_cache() {
        let cache = MemoryLocatorCache::new();
        assert_eq!(cache.get("k"), None);

        cache.set("k", "https://x/1").unwrap();
        assert_eq!(cache.get("k").as_deref(), Some("https://x/1"));

        cache.clear("k").unwrap();
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_file_cache_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("locators.json");

        FileLocatorCache::new(&path).set("notebookJsonBlobUrl", "https://x/1").unwrap();

        let reopened = FileLocatorCache::new(&path);
        assert_eq!(
            reopened.get("notebookJsonBlobUrl").as_deref(),
            Some("https://x/1")
        );
        assert_eq!(reopened.get("codeEditorJsonBlobUrl"), None);
    }

    #[test]
    fn test_file_cache_slots_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileLocatorCache::new(dir.path().join("locators.json"));

        cache.set("a", "https://x/a").unwrap();
        cache.set("b", "https://x/b").unwrap();
        cache.clear("a").unwrap();

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b").as_deref(), Some("https://x/b"));
    }

    #[test]
    fn test_file_cache_corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locators.json");
        fs::write(&path, b"{ not json").unwrap();

        let cache = FileLocatorCache::new(&path);
        assert_eq!(cache.get("a"), None);

        // Writing replaces the corrupt file
        cache.set("a", "https://x/a").unwrap();
        assert_eq!(cache.get("a").as_deref(), Some("https://x/a"));
    }

    #[test]
    fn test_clear_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileLocatorCache::new(dir.path().join("locators.json"));
        assert!(cache.clear("a").is_ok());
        assert!(!cache.path().exists());
    }
}
