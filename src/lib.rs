/*!
# Emodiary

Emodiary is a one-entry-a-day diary. Each entry is classified into one of seven
emotions when it is written, and the diary can be browsed as a month calendar or
summarized as per-month emotion statistics.

## Core Features

- Write or rewrite the entry for any day; its emotion is classified from the text
- Read back a day's entry
- Month calendar views showing the emotion of each day
- Monthly statistics: counts, modal emotion, a radar-chart profile and a summary message
- SQLite or JSON-file storage, scoped per user

## Architecture

- `emotion`: Emotion categories, presentation glyphs and the keyword classifier
- `diary`: Date keys, user ids, entries and the per-user `DiaryStore`
- `storage`: Keyed blob stores (SQLite, JSON files, in-memory)
- `calendar`: Month views
- `stats`: Per-month aggregation and radar chart geometry
- `ops`: Command implementations used by the binary
- `cli`, `config`, `errors`, `constants`: Application plumbing

## Usage Example

```rust
use emodiary::calendar::month_view;
use emodiary::stats::aggregate;
use emodiary::storage::MemoryStore;
use emodiary::{DiaryStore, EmotionCategory, UserId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = DiaryStore::new(MemoryStore::new());
    let user = UserId::new("alice")?;

    let entry = store.write(&user, "2025-06-01".parse()?, "오늘 정말 행복했다")?;
    assert_eq!(entry.emotion, EmotionCategory::Joy);

    let diary = store.load(&user);
    let today = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let view = month_view(&diary, 2025, 5, today)?;
    assert_eq!(view.entry_count(), 1);

    let stats = aggregate(&diary, 2025, 5);
    assert_eq!(stats.modal_emotion, Some(EmotionCategory::Joy));
    Ok(())
}
```
*/

/// Month views over a diary
pub mod calendar;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Diary data model and the per-user store
pub mod diary;
/// Emotion categories and classification
pub mod emotion;
/// Error types and utilities for error handling
pub mod errors;
/// Command implementations
pub mod ops;
/// Monthly emotion statistics
pub mod stats;
/// Durable record storage
pub mod storage;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use diary::{DateKey, DiaryCollection, DiaryEntry, DiaryStore, UserId};
pub use emotion::{presentation_for, EmotionCategory, EmotionClassifier, KeywordClassifier};
pub use errors::{AppError, AppResult};
pub use stats::PeriodStats;
