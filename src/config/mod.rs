//! Configuration management for the emodiary application.
//!
//! This module loads and validates configuration settings from environment
//! variables, with sensible defaults. It selects the data directory, the storage
//! backend and the user whose diary is being used.
//!
//! # Environment Variables
//!
//! - `EMODIARY_DIR`: Path to the data directory (defaults to ~/.local/share/emodiary)
//! - `EMODIARY_BACKEND`: Storage backend, `sqlite` (default) or `file`
//! - `EMODIARY_USER`: Diary owner; falls back to `USER`, then to `default`
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DATABASE_FILE_NAME, DEFAULT_DATA_SUBDIR, DEFAULT_USER_ID, ENV_VAR_EMODIARY_BACKEND,
    ENV_VAR_EMODIARY_DIR, ENV_VAR_EMODIARY_USER, ENV_VAR_HOME, ENV_VAR_USER, FILE_STORE_SUBDIR,
    REDACTED_PLACEHOLDER,
};
use crate::diary::UserId;
use crate::errors::{AppError, AppResult};
use crate::storage::Backend;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(unix)]
use crate::constants::DEFAULT_DIR_PERMISSIONS;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Configuration for the emodiary application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use emodiary::Config;
/// use emodiary::storage::Backend;
/// use emodiary::UserId;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/var/lib/emodiary"),
///     backend: Backend::File,
///     user_id: UserId::new("alice").unwrap(),
/// };
/// assert!(config.validate().is_ok());
/// ```
///
/// Loading configuration from environment variables:
/// ```no_run
/// use emodiary::Config;
/// use std::env;
///
/// env::set_var("EMODIARY_DIR", "/custom/diary/path");
/// env::set_var("EMODIARY_BACKEND", "file");
///
/// let config = Config::load().expect("Failed to load configuration");
/// assert_eq!(config.backend.to_string(), "file");
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory holding the database or the JSON store.
    pub data_dir: PathBuf,

    /// Durable store used for diary records.
    pub backend: Backend,

    /// Owner of the diary being read or written.
    ///
    /// Loaded in order of precedence from `EMODIARY_USER`, `USER`, then `"default"`.
    pub user_id: UserId,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("backend", &self.backend)
            .field("user_id", &REDACTED_PLACEHOLDER)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Same as [`Config::load_with_user`] without a user override.
    ///
    /// # Errors
    ///
    /// See [`Config::load_with_user`].
    pub fn load() -> AppResult<Self> {
        Config::load_with_user(None)
    }

    /// Loads configuration from environment variables, taking the diary owner
    /// from `user_override` when given.
    ///
    /// The data directory path is expanded using `shellexpand` to handle `~` and
    /// environment variable references. `EMODIARY_USER` and `USER` are only read,
    /// and only validated, when there is no override.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `EMODIARY_BACKEND` names an unknown backend
    /// - The user identifier in use is not a valid `UserId`
    pub fn load_with_user(user_override: Option<&str>) -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_EMODIARY_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let backend = match env::var(ENV_VAR_EMODIARY_BACKEND) {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            _ => Backend::default(),
        };

        let user_raw = match user_override {
            Some(user) => user.to_string(),
            None => env::var(ENV_VAR_EMODIARY_USER)
                .or_else(|_| env::var(ENV_VAR_USER))
                .unwrap_or_else(|_| DEFAULT_USER_ID.to_string()),
        };
        let user_id = Config::parse_user_id(&user_raw)?;

        let config = Config {
            data_dir,
            backend,
            user_id,
        };
        debug!(backend = %config.backend, "Configuration loaded");
        Ok(config)
    }

    /// Validates a user identifier taken from the environment or the command line.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` describing why the identifier was rejected.
    pub fn parse_user_id(raw: &str) -> AppResult<UserId> {
        UserId::new(raw.trim()).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty" if the data directory path is empty
    /// - "Data directory must be an absolute path" if the path is relative
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Path of the SQLite database used by the `sqlite` backend.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Root directory of the `file` backend.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join(FILE_STORE_SUBDIR)
    }

    /// Creates the data directory if needed, owner-only on Unix.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the directory cannot be created or its
    /// permissions cannot be set.
    pub fn ensure_data_dir(&self) -> AppResult<()> {
        ensure_private_dir(&self.data_dir)
    }
}

fn ensure_private_dir(dir: &Path) -> AppResult<()> {
    if dir.exists() {
        return Ok(());
    }

    debug!("Creating data directory");
    fs::create_dir_all(dir)?;

    #[cfg(unix)]
    fs::set_permissions(dir, fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))?;

    Ok(())
}
