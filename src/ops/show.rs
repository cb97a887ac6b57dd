//! Show a single diary entry.

use crate::diary::{DateKey, DiaryEntry, DiaryStore, UserId};
use crate::emotion::EmotionClassifier;
use crate::storage::BlobStore;

/// Formats an entry as a header line (date, glyph, emotion) followed by its text.
pub fn render_entry(entry: &DiaryEntry) -> String {
    format!(
        "{} {} {} ({})\n{}",
        entry.date_key,
        entry.glyph(),
        entry.emotion.label(),
        entry.emotion,
        entry.content
    )
}

/// Renders the user's entry for `date_key`, or a notice that there is none.
pub fn show_entry<B: BlobStore, C: EmotionClassifier>(
    store: &DiaryStore<B, C>,
    user: &UserId,
    date_key: &DateKey,
) -> String {
    match store.read(user, date_key) {
        Some(entry) => render_entry(&entry),
        None => format!("No entry for {}", date_key),
    }
}
