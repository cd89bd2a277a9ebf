use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::db::migrations::run_migrations;

// ─── Keys ────────────────────────────────────────────────────────────────────

pub const NAMESPACE: &str = "tadhkir";

/// Every persisted collection lives under one of these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Prayers,
    Habits,
    FavoriteAyat,
    VirtueRecords,
    Tasbeeh,
    LastSeen,
    CustomIntention,
}

impl RecordKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::Prayers => "tadhkir-prayers",
            RecordKey::Habits => "tadhkir-habits",
            RecordKey::FavoriteAyat => "tadhkir-favorite-ayat",
            RecordKey::VirtueRecords => "tadhkir-virtue-records",
            RecordKey::Tasbeeh => "tadhkir-tasbeeh",
            RecordKey::LastSeen => "tadhkir-last-seen",
            RecordKey::CustomIntention => "tadhkir-custom-intention",
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Backends ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("migration failed: {0}")]
    Migration(String),
}

/// Raw string persistence. Values are whole records; there are no partial updates.
pub trait RecordStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        log::debug!("Opened record store at {:?}", path);
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        run_migrations(&conn).map_err(|e| StoreError::Migration(e.to_string()))?;
        Ok(Self { conn })
    }
}

impl RecordStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row(
                "SELECT value FROM records WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(StoreError::from)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO records (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM records WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// In-process store, used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// Stand-in when no storage could be opened: reads come back empty, writes go nowhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl RecordStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn put(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

// ─── Typed adapter ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Found,
    Missing,
    Unavailable,
    /// Stored value could not be decoded and was replaced by the default.
    Corrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Unavailable,
    Failed,
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        *self == SaveStatus::Saved
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub status: LoadStatus,
}

/// Typed, fail-closed view over a [`RecordStore`]. Nothing here returns an error:
/// problems are logged and reported through [`LoadStatus`] / [`SaveStatus`].
#[derive(Clone, Copy)]
pub struct Records<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> Records<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    pub fn load<T: DeserializeOwned>(&self, key: RecordKey, default: T) -> Loaded<T> {
        match self.load_text(key) {
            Loaded {
                value: Some(raw),
                ..
            } => match serde_json::from_str(&raw) {
                Ok(value) => Loaded {
                    value,
                    status: LoadStatus::Found,
                },
                Err(e) => {
                    log::warn!("Discarding corrupt value under '{}': {}", key, e);
                    Loaded {
                        value: default,
                        status: LoadStatus::Corrupt,
                    }
                }
            },
            Loaded { status, .. } => Loaded {
                value: default,
                status,
            },
        }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: RecordKey, value: &T) -> SaveStatus {
        match serde_json::to_string(value) {
            Ok(raw) => self.save_text(key, &raw),
            Err(e) => {
                log::error!("Serializing '{}': {}", key, e);
                SaveStatus::Failed
            }
        }
    }

    /// Raw text values (last-seen marker, custom intention) are stored unquoted.
    pub fn load_text(&self, key: RecordKey) -> Loaded<Option<String>> {
        match self.store.get(key.as_str()) {
            Ok(Some(raw)) => Loaded {
                value: Some(raw),
                status: LoadStatus::Found,
            },
            Ok(None) => Loaded {
                value: None,
                status: LoadStatus::Missing,
            },
            Err(StoreError::Unavailable) => {
                log::debug!("Storage unavailable, '{}' reads as default", key);
                Loaded {
                    value: None,
                    status: LoadStatus::Unavailable,
                }
            }
            Err(e) => {
                log::error!("Reading '{}': {}", key, e);
                Loaded {
                    value: None,
                    status: LoadStatus::Unavailable,
                }
            }
        }
    }

    pub fn save_text(&self, key: RecordKey, value: &str) -> SaveStatus {
        Self::write_status(key, self.store.put(key.as_str(), value))
    }

    pub fn remove(&self, key: RecordKey) -> SaveStatus {
        Self::write_status(key, self.store.remove(key.as_str()))
    }

    fn write_status(key: RecordKey, result: Result<(), StoreError>) -> SaveStatus {
        match result {
            Ok(()) => SaveStatus::Saved,
            Err(StoreError::Unavailable) => {
                log::debug!("Storage unavailable, '{}' not saved", key);
                SaveStatus::Unavailable
            }
            Err(e) => {
                log::error!("Writing '{}': {}", key, e);
                SaveStatus::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tadhkir.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            let records = Records::new(&store);
            assert_eq!(records.save(RecordKey::FavoriteAyat, &vec![1u32, 4]), SaveStatus::Saved);
        }
        let store = SqliteStore::open(&path).unwrap();
        let loaded: Loaded<Vec<u32>> = Records::new(&store).load(RecordKey::FavoriteAyat, vec![]);
        assert_eq!(loaded.value, vec![1, 4]);
        assert_eq!(loaded.status, LoadStatus::Found);
    }

    #[test]
    fn save_overwrites_whole_value() {
        let store = SqliteStore::open_in_memory().unwrap();
        let records = Records::new(&store);
        records.save(RecordKey::FavoriteAyat, &vec![1u32, 2, 3]);
        records.save(RecordKey::FavoriteAyat, &vec![5u32]);
        assert_eq!(
            store.get("tadhkir-favorite-ayat").unwrap().as_deref(),
            Some("[5]")
        );
    }

    #[test]
    fn missing_key_returns_default() {
        let store = MemoryStore::default();
        let loaded = Records::new(&store).load(RecordKey::Habits, Vec::<u32>::new());
        assert!(loaded.value.is_empty());
        assert_eq!(loaded.status, LoadStatus::Missing);
    }

    #[test]
    fn corrupt_value_fails_closed() {
        let store = MemoryStore::default();
        store.put("tadhkir-favorite-ayat", "{not json").unwrap();
        let loaded = Records::new(&store).load(RecordKey::FavoriteAyat, vec![7u32]);
        assert_eq!(loaded.value, vec![7]);
        assert_eq!(loaded.status, LoadStatus::Corrupt);
    }

    #[test]
    fn wrong_shape_is_corrupt_too() {
        let store = MemoryStore::default();
        store.put("tadhkir-favorite-ayat", r#"{"a":1}"#).unwrap();
        let loaded = Records::new(&store).load(RecordKey::FavoriteAyat, Vec::<u32>::new());
        assert_eq!(loaded.status, LoadStatus::Corrupt);
    }

    #[test]
    fn unavailable_store_reads_defaults_and_drops_writes() {
        let store = UnavailableStore;
        let records = Records::new(&store);
        assert_eq!(records.save(RecordKey::Tasbeeh, &3u32), SaveStatus::Unavailable);
        let loaded = records.load(RecordKey::Tasbeeh, 0u32);
        assert_eq!(loaded.value, 0);
        assert_eq!(loaded.status, LoadStatus::Unavailable);
        assert_eq!(records.remove(RecordKey::LastSeen), SaveStatus::Unavailable);
    }

    #[test]
    fn text_values_are_stored_unquoted() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        records.save_text(RecordKey::LastSeen, "2025-03-01");
        assert_eq!(
            store.get("tadhkir-last-seen").unwrap().as_deref(),
            Some("2025-03-01")
        );
        assert_eq!(records.remove(RecordKey::LastSeen), SaveStatus::Saved);
        assert_eq!(records.load_text(RecordKey::LastSeen).status, LoadStatus::Missing);
    }

    #[test]
    fn keys_are_namespaced() {
        for key in [
            RecordKey::Prayers,
            RecordKey::Habits,
            RecordKey::FavoriteAyat,
            RecordKey::VirtueRecords,
            RecordKey::Tasbeeh,
            RecordKey::LastSeen,
            RecordKey::CustomIntention,
        ] {
            assert!(key.as_str().starts_with(NAMESPACE));
        }
    }
}
