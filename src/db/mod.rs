pub mod migrations;
pub mod repository;

#[cfg(test)]
pub use repository::MemoryStore;
pub use repository::{
    LoadStatus, RecordKey, RecordStore, Records, SaveStatus, SqliteStore, UnavailableStore,
};
