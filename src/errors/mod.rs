//! Error handling utilities for the emodiary application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors in diary input and diary domain rules.
///
/// These errors are reported back to the caller so that the presentation layer
/// can prompt again. None of them leave the stored diary in a modified state.
///
/// # Examples
///
/// ```
/// use emodiary::errors::DiaryError;
///
/// let error = DiaryError::EmptyContent;
/// assert!(format!("{}", error).contains("content is required"));
///
/// let error = DiaryError::InvalidDateKey("2025-13-01".to_string());
/// assert!(format!("{}", error).contains("2025-13-01"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiaryError {
    /// The entry text was empty or contained only whitespace.
    #[error("Diary content is required. Write something before saving the entry.")]
    EmptyContent,

    /// A date string could not be parsed as `YYYY-MM-DD` or `YYYYMMDD`.
    #[error("Invalid date format: '{0}'. Use YYYY-MM-DD or YYYYMMDD.")]
    InvalidDateKey(String),

    /// A zero-based month index outside `0..=11`.
    #[error("Invalid month index {0}: months are numbered 0 (January) to 11 (December)")]
    InvalidMonth(u32),

    /// A year outside the range of representable calendar dates.
    #[error("Invalid period: year {year}, month index {month} is outside the supported calendar range")]
    InvalidPeriod { year: i32, month: u32 },

    /// A user identifier that cannot be used as a storage scope.
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),
}

/// Represents specific error cases that can occur when locking store files.
///
/// # Examples
///
/// ```
/// use emodiary::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::FileBusy {
///     path: PathBuf::from("/path/to/store/entries.json"),
/// };
/// assert!(format!("{}", error).contains("in use by another process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the file is already locked by another process.
    #[error("Store file is in use by another process: {path}. Please wait for the other emodiary process to finish.")]
    FileBusy {
        /// The path to the file that is locked
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock for store file {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the file that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents specific error cases that can occur during database operations.
///
/// # Examples
///
/// ```
/// use emodiary::errors::DatabaseError;
///
/// let error = DatabaseError::Custom("schema version mismatch".to_string());
/// assert!(format!("{}", error).contains("schema version mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}\n\nIf you're seeing 'file is not a database', the database file may be corrupted.")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}\n\nThis may indicate database connection issues. Try closing other emodiary instances.")]
    Pool(#[from] r2d2::Error),

    /// Custom database error with detailed message.
    #[error("Database error: {0}")]
    Custom(String),
}

/// Represents all possible errors that can occur in the emodiary application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use emodiary::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from a diary error:
/// ```
/// use emodiary::errors::{AppError, DiaryError};
///
/// let app_error: AppError = DiaryError::EmptyContent.into();
/// assert!(matches!(app_error, AppError::Diary(DiaryError::EmptyContent)));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected diary input (empty content, malformed dates, bad months).
    #[error("Diary error: {0}")]
    Diary(#[from] DiaryError),

    /// Errors related to database operations.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Errors related to file locking in the file store.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),

    /// Errors encoding a diary collection for storage.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use emodiary::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
