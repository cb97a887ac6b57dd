//! User-facing diary operations.
//!
//! Each operation takes an opened [`DiaryStore`], runs one command against it,
//! and returns the text to print. Printing is left to the binary so the
//! operations can be tested without capturing stdout.

pub mod calendar;
pub mod show;
pub mod stats;
pub mod write;

pub use calendar::show_calendar;
pub use show::{render_entry, show_entry};
pub use stats::{show_stats, StatsReport};
pub use write::{read_content, write_entry};

use crate::config::Config;
use crate::diary::DiaryStore;
use crate::errors::AppResult;
use crate::storage::{open_backend, BlobStore};
use tracing::debug;

/// Diary store over the backend selected at runtime.
pub type AppStore = DiaryStore<Box<dyn BlobStore>>;

/// Creates the data directory and opens the configured backend.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the backend
/// cannot be opened (for example, an unreadable database file).
pub fn open_store(config: &Config) -> AppResult<AppStore> {
    config.ensure_data_dir()?;
    let backend = open_backend(config)?;
    debug!(backend = %config.backend, "Diary store ready");
    Ok(DiaryStore::new(backend))
}
