//! Journal record store

use crate::domain::JournalRecord;
use crate::error::{Result, ZenithError};
use crate::infrastructure::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Abstract store for journal records.
///
/// Fetch returns the current full record sequence; there is no pagination.
/// Store failures stay at this boundary — calendar aggregation always
/// operates on whatever complete sequence it was handed.
pub trait JournalStore {
    /// Current full sequence of records, newest first
    fn fetch_records(&self) -> Result<Vec<JournalRecord>>;

    /// Persist a record, assigning it an id; returns the stored record
    fn add_record(&self, record: JournalRecord) -> Result<JournalRecord>;

    /// Delete the record with the given id
    fn delete_record(&self, id: &str) -> Result<()>;
}

/// On-disk shape of .zenith/notes.json
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    next_id: u64,
    records: Vec<JournalRecord>,
}

/// File-backed store rooted at a directory containing `.zenith/`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    pub root: PathBuf,
}

impl JsonFileStore {
    /// Create a store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        JsonFileStore { root }
    }

    /// Discover the journal root by walking up from the current directory.
    /// First checks the ZENITH_ROOT environment variable, then falls back
    /// to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("ZENITH_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_zenith_dir(&path) {
                return Ok(JsonFileStore::new(path));
            } else {
                return Err(ZenithError::Config(format!(
                    "ZENITH_ROOT is set to '{}' but no .zenith directory found. \
                    Run 'zenith init' in that directory or unset ZENITH_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_zenith_dir(&current) {
                return Ok(JsonFileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(ZenithError::NotZenithDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_zenith_dir(path: &Path) -> bool {
        path.join(".zenith").is_dir()
    }

    /// Check if the .zenith directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_zenith_dir(&self.root)
    }

    /// Create the .zenith directory structure
    pub fn initialize(&self) -> Result<()> {
        let zenith_dir = self.root.join(".zenith");

        if zenith_dir.exists() {
            return Err(ZenithError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&zenith_dir)?;
        Ok(())
    }

    /// Load configuration from .zenith/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .zenith/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn notes_path(&self) -> PathBuf {
        self.root.join(".zenith").join("notes.json")
    }

    fn read_store_file(&self) -> Result<StoreFile> {
        let path = self.notes_path();
        if !path.exists() {
            return Ok(StoreFile::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_store_file(&self, file: &StoreFile) -> Result<()> {
        let path = self.notes_path();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(file)?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

impl JournalStore for JsonFileStore {
    fn fetch_records(&self) -> Result<Vec<JournalRecord>> {
        let mut records = self.read_store_file()?.records;
        // Newest first; undated records sink to the end.
        records.sort_by(|a, b| match (&a.timestamp, &b.timestamp) {
            (Some(ta), Some(tb)) => tb.cmp(ta),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.title.cmp(&b.title),
        });
        Ok(records)
    }

    fn add_record(&self, mut record: JournalRecord) -> Result<JournalRecord> {
        let mut file = self.read_store_file()?;
        file.next_id += 1;
        record.id = Some(file.next_id.to_string());
        file.records.push(record.clone());
        self.write_store_file(&file)?;
        Ok(record)
    }

    fn delete_record(&self, id: &str) -> Result<()> {
        let mut file = self.read_store_file()?;
        let before = file.records.len();
        file.records.retain(|r| r.id.as_deref() != Some(id));
        if file.records.len() == before {
            return Err(ZenithError::RecordNotFound(id.to_string()));
        }
        self.write_store_file(&file)?;
        Ok(())
    }
}

/// In-memory store used by tests and non-persistent consumers
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<StoreFile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Seed the store with pre-built records
    pub fn with_records(records: Vec<JournalRecord>) -> Self {
        MemoryStore {
            state: Mutex::new(StoreFile {
                next_id: records.len() as u64,
                records,
            }),
        }
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, StoreFile>> {
        self.state
            .lock()
            .map_err(|_| ZenithError::Config("record store lock poisoned".to_string()))
    }
}

impl JournalStore for MemoryStore {
    fn fetch_records(&self) -> Result<Vec<JournalRecord>> {
        Ok(self.locked()?.records.clone())
    }

    fn add_record(&self, mut record: JournalRecord) -> Result<JournalRecord> {
        let mut state = self.locked()?;
        state.next_id += 1;
        record.id = Some(state.next_id.to_string());
        state.records.push(record.clone());
        Ok(record)
    }

    fn delete_record(&self, id: &str) -> Result<()> {
        let mut state = self.locked()?;
        let before = state.records.len();
        state.records.retain(|r| r.id.as_deref() != Some(id));
        if state.records.len() == before {
            return Err(ZenithError::RecordNotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::OnceLock;
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn record(title: &str, timestamp: Option<&str>) -> JournalRecord {
        JournalRecord {
            id: None,
            title: title.to_string(),
            content: String::new(),
            emotion_name: None,
            emotion_emoji: Some("😊".to_string()),
            timestamp: timestamp.map(str::to_string),
        }
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        assert!(!store.is_initialized());
        store.initialize().unwrap();
        assert!(store.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        store.initialize().unwrap();
        assert!(store.initialize().is_err());
    }

    #[test]
    fn test_fetch_from_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let records = store.fetch_records().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let first = store
            .add_record(record("one", Some("2025-01-17T10:00:00Z")))
            .unwrap();
        let second = store
            .add_record(record("two", Some("2025-01-18T10:00:00Z")))
            .unwrap();

        assert_eq!(first.id.as_deref(), Some("1"));
        assert_eq!(second.id.as_deref(), Some("2"));
    }

    #[test]
    fn test_fetch_sorted_newest_first() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        store
            .add_record(record("old", Some("2025-01-15T10:00:00Z")))
            .unwrap();
        store.add_record(record("undated", None)).unwrap();
        store
            .add_record(record("new", Some("2025-01-17T10:00:00Z")))
            .unwrap();

        let records = store.fetch_records().unwrap();
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_delete_record() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let stored = store
            .add_record(record("one", Some("2025-01-17T10:00:00Z")))
            .unwrap();
        store.delete_record(stored.id.as_deref().unwrap()).unwrap();

        assert!(store.fetch_records().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_record() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let result = store.delete_record("99");
        match result.unwrap_err() {
            ZenithError::RecordNotFound(id) => assert_eq!(id, "99"),
            other => panic!("Expected RecordNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let first = store
            .add_record(record("one", Some("2025-01-17T10:00:00Z")))
            .unwrap();
        store.delete_record(first.id.as_deref().unwrap()).unwrap();
        let second = store
            .add_record(record("two", Some("2025-01-18T10:00:00Z")))
            .unwrap();

        assert_eq!(second.id.as_deref(), Some("2"));
    }

    #[test]
    fn test_records_persist_across_store_instances() {
        let temp = TempDir::new().unwrap();
        {
            let store = JsonFileStore::new(temp.path().to_path_buf());
            store.initialize().unwrap();
            store
                .add_record(record("persisted", Some("2025-01-17T10:00:00Z")))
                .unwrap();
        }

        let reopened = JsonFileStore::new(temp.path().to_path_buf());
        let records = reopened.fetch_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "persisted");
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".zenith")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let store = JsonFileStore::discover_from(&subdir).unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_zenith() {
        let temp = TempDir::new().unwrap();

        let result = JsonFileStore::discover_from(temp.path());
        match result.unwrap_err() {
            ZenithError::NotZenithDirectory(_) => {}
            _ => panic!("Expected NotZenithDirectory error"),
        }
    }

    #[test]
    fn test_discover_with_zenith_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("ZENITH_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".zenith")).unwrap();

        std::env::set_var("ZENITH_ROOT", temp.path());

        let store = JsonFileStore::discover().unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_zenith_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("ZENITH_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("ZENITH_ROOT", temp.path());

        let result = JsonFileStore::discover();
        match result.unwrap_err() {
            ZenithError::Config(msg) => {
                assert!(msg.contains("no .zenith directory"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let mut config = Config::new();
        config.breathing_secs = 90;
        store.save_config(&config).unwrap();

        let loaded = store.load_config().unwrap();
        assert_eq!(loaded.breathing_secs, 90);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        let stored = store
            .add_record(record("one", Some("2025-01-17T10:00:00Z")))
            .unwrap();
        assert_eq!(stored.id.as_deref(), Some("1"));

        assert_eq!(store.fetch_records().unwrap().len(), 1);
        store.delete_record("1").unwrap();
        assert!(store.fetch_records().unwrap().is_empty());
        assert!(store.delete_record("1").is_err());
    }

    #[test]
    fn test_memory_store_seeded() {
        let store = MemoryStore::with_records(vec![record("seed", None)]);
        assert_eq!(store.fetch_records().unwrap().len(), 1);
    }
}
