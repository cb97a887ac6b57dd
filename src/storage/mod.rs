//! Durable storage for per-user diary records.
//!
//! Storage is a keyed blob store: each record is addressed by a structured
//! [`StorageKey`] of `(namespace, user_id)` and holds an opaque serialized payload.
//! Every call is a scoped acquisition (open, read or write, close); no lock or
//! transaction is held between calls.
//!
//! # Module Structure
//!
//! - `memory`: In-process store, used by tests
//! - `sqlite`: SQLite-backed store with connection pooling (default backend)
//! - `file`: One JSON file per record with advisory file locks

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::config::Config;
use crate::constants::ENTRIES_NAMESPACE;
use crate::diary::UserId;
use crate::errors::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Address of a stored record.
///
/// Keeping the namespace and user apart avoids the collisions that come from
/// building keys by string concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    namespace: String,
    user_id: UserId,
}

impl StorageKey {
    pub fn new(namespace: impl Into<String>, user_id: UserId) -> Self {
        StorageKey {
            namespace: namespace.into(),
            user_id,
        }
    }

    /// Key of a user's diary collection.
    pub fn entries(user_id: &UserId) -> Self {
        StorageKey::new(ENTRIES_NAMESPACE, user_id.clone())
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.user_id)
    }
}

/// A keyed store of serialized records.
///
/// `load` returns `Ok(None)` when no record exists for the key; absence is not
/// an error. `save` must not return until the payload is durable.
pub trait BlobStore {
    fn load(&self, key: &StorageKey) -> AppResult<Option<String>>;

    fn save(&self, key: &StorageKey, payload: &str) -> AppResult<()>;
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn load(&self, key: &StorageKey) -> AppResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &StorageKey, payload: &str) -> AppResult<()> {
        (**self).save(key, payload)
    }
}

impl<S: BlobStore + ?Sized> BlobStore for &S {
    fn load(&self, key: &StorageKey) -> AppResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &StorageKey, payload: &str) -> AppResult<()> {
        (**self).save(key, payload)
    }
}

/// Which durable store the application uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Sqlite,
    File,
}

impl FromStr for Backend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "file" => Ok(Backend::File),
            other => Err(AppError::Config(format!(
                "Unknown storage backend '{}'. Expected 'sqlite' or 'file'",
                other
            ))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Sqlite => f.write_str("sqlite"),
            Backend::File => f.write_str("file"),
        }
    }
}

/// Opens the store selected by the configuration.
pub fn open_backend(config: &Config) -> AppResult<Box<dyn BlobStore>> {
    debug!("Opening {} storage backend", config.backend);
    match config.backend {
        Backend::Sqlite => Ok(Box::new(SqliteStore::open(&config.db_path())?)),
        Backend::File => Ok(Box::new(FileStore::new(config.store_dir()))),
    }
}
