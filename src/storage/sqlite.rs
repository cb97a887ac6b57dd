//! SQLite-backed blob store.
//!
//! Records live in a single `records` table keyed by `(namespace, user_id)`.
//! Connections come from an r2d2 pool; each `load`/`save` checks a connection
//! out for the duration of one statement.
//!
//! # Example
//!
//! ```no_run
//! use emodiary::storage::{BlobStore, SqliteStore, StorageKey};
//! use emodiary::UserId;
//! use std::path::Path;
//!
//! let store = SqliteStore::open(Path::new("/tmp/emodiary.db"))?;
//! let key = StorageKey::entries(&UserId::new("alice")?);
//! store.save(&key, "{}")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::{BlobStore, StorageKey};
use crate::constants::DB_POOL_MAX_SIZE;
use crate::errors::{AppResult, DatabaseError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Connection, OptionalExtension};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Current schema version, stored in `PRAGMA user_version`.
///
/// Increment this whenever schema changes are made to support future migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Blob store handle with connection pooling.
#[derive(Clone)]
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

impl fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteStore")
            .field("connections", &self.pool.state().connections)
            .finish()
    }
}

impl SqliteStore {
    /// Opens or creates the database file and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file cannot be opened or is not a database
    /// - The connection pool cannot be initialized
    /// - Schema creation fails
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(DB_POOL_MAX_SIZE)
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        let store = SqliteStore { pool };
        store.initialize_schema()?;
        info!("Database opened successfully");
        Ok(store)
    }

    /// Opens a private in-memory database.
    ///
    /// Every in-memory connection is a separate database, so the pool is limited
    /// to a single connection.
    pub fn open_in_memory() -> AppResult<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        let store = SqliteStore { pool };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Creates the schema if it does not exist yet.
    ///
    /// This is idempotent and safe to call multiple times.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        create_tables(&conn)?;
        debug!("Database schema initialized");
        Ok(())
    }
}

/// Creates all database tables.
///
/// # Errors
///
/// Returns an error if any DDL statement fails, or if the database was written
/// by a newer schema version.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?;

    if version > SCHEMA_VERSION {
        return Err(DatabaseError::Custom(format!(
            "database schema version {} is newer than supported version {}",
            version, SCHEMA_VERSION
        ))
        .into());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            namespace TEXT NOT NULL,
            user_id TEXT NOT NULL,
            payload TEXT NOT NULL,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (namespace, user_id)
        );
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)
        .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

impl BlobStore for SqliteStore {
    fn load(&self, key: &StorageKey) -> AppResult<Option<String>> {
        debug!("Loading record {}", key);
        let conn = self.get_conn()?;

        let payload = conn
            .query_row(
                "SELECT payload FROM records WHERE namespace = ?1 AND user_id = ?2",
                params![key.namespace(), key.user_id().as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(DatabaseError::Sqlite)?;

        Ok(payload)
    }

    fn save(&self, key: &StorageKey, payload: &str) -> AppResult<()> {
        debug!("Saving record {} ({} bytes)", key, payload.len());
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO records (namespace, user_id, payload, updated_at)
            VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
            ON CONFLICT(namespace, user_id) DO UPDATE SET
                payload = excluded.payload,
                updated_at = CURRENT_TIMESTAMP
            "#,
            params![key.namespace(), key.user_id().as_str(), payload],
        )
        .map_err(DatabaseError::Sqlite)?;

        Ok(())
    }
}
