//! Write a diary entry.

use super::show::render_entry;
use crate::diary::{DateKey, DiaryStore, UserId};
use crate::emotion::EmotionClassifier;
use crate::errors::AppResult;
use crate::storage::BlobStore;
use std::io::Read;
use tracing::debug;

/// Returns the entry text from `--text` unchanged, or reads it from `input`
/// without the trailing line break a terminal or pipe adds.
///
/// # Errors
///
/// Returns `AppError::Io` if reading `input` fails or it is not valid UTF-8.
pub fn read_content<R: Read>(text: Option<String>, mut input: R) -> AppResult<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    debug!("Reading entry text from stdin");
    let mut content = String::new();
    input.read_to_string(&mut content)?;
    let trimmed_len = content.trim_end_matches(['\r', '\n']).len();
    content.truncate(trimmed_len);
    Ok(content)
}

/// Stores `content` as the entry for `date_key` and renders the result with
/// the feedback message for its emotion.
///
/// # Errors
///
/// Returns `DiaryError::EmptyContent` for blank text, or any backend error
/// raised while persisting the diary.
pub fn write_entry<B: BlobStore, C: EmotionClassifier>(
    store: &DiaryStore<B, C>,
    user: &UserId,
    date_key: DateKey,
    content: &str,
) -> AppResult<String> {
    let entry = store.write(user, date_key, content)?;
    Ok(format!(
        "{}\n\n{}",
        render_entry(&entry),
        entry.emotion.feedback()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::EmotionCategory;
    use crate::errors::{AppError, DiaryError};
    use crate::storage::MemoryStore;
    use std::io::Cursor;

    #[test]
    fn test_read_content_prefers_text_argument() {
        let content = read_content(Some("직접 입력\n".to_string()), Cursor::new("stdin")).unwrap();
        assert_eq!(content, "직접 입력\n");
    }

    #[test]
    fn test_read_content_from_input() {
        let content = read_content(None, Cursor::new("오늘은\n무서운 꿈을 꿨다\r\n")).unwrap();
        assert_eq!(content, "오늘은\n무서운 꿈을 꿨다");
    }

    #[test]
    fn test_write_entry_renders_feedback() {
        let store = DiaryStore::new(MemoryStore::new());
        let user = UserId::new("alice").unwrap();

        let output = write_entry(&store, &user, "2025-06-01".parse().unwrap(), "정말 행복했다\n").unwrap();

        assert!(output.contains("2025-06-01"));
        assert!(output.contains("😊"));
        assert!(output.contains(EmotionCategory::Joy.feedback()));

        // Content is stored as given
        let stored = store.read(&user, &"2025-06-01".parse().unwrap()).unwrap();
        assert_eq!(stored.content, "정말 행복했다\n");
    }

    #[test]
    fn test_write_entry_rejects_blank_input() {
        let store = DiaryStore::new(MemoryStore::new());
        let user = UserId::new("alice").unwrap();

        let result = write_entry(&store, &user, "2025-06-01".parse().unwrap(), "\n\n");
        assert!(matches!(result, Err(AppError::Diary(DiaryError::EmptyContent))));
    }
}
