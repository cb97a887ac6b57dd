//! Per-user diary persistence.
//!
//! The store loads a user's whole [`DiaryCollection`] from a [`BlobStore`],
//! applies one change, and writes the whole collection back before returning.

use super::{DateKey, DiaryCollection, DiaryEntry, UserId};
use crate::emotion::{EmotionClassifier, KeywordClassifier};
use crate::errors::{AppResult, DiaryError};
use crate::storage::{BlobStore, StorageKey};
use tracing::{debug, info, warn};

/// Creates, reads and updates diary entries for any user.
///
/// # Examples
///
/// ```
/// use emodiary::storage::MemoryStore;
/// use emodiary::{DiaryStore, EmotionCategory, UserId};
///
/// let store = DiaryStore::new(MemoryStore::new());
/// let user = UserId::new("alice")?;
/// let date = "2025-06-01".parse()?;
///
/// let entry = store.write(&user, date, "오늘 정말 행복했다")?;
/// assert_eq!(entry.emotion, EmotionCategory::Joy);
/// assert_eq!(store.read(&user, &date), Some(entry));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct DiaryStore<B, C = KeywordClassifier> {
    backend: B,
    classifier: C,
}

impl<B: BlobStore> DiaryStore<B, KeywordClassifier> {
    /// Creates a store that classifies with the built-in keyword table.
    pub fn new(backend: B) -> Self {
        DiaryStore::with_classifier(backend, KeywordClassifier::default())
    }
}

impl<B: BlobStore, C: EmotionClassifier> DiaryStore<B, C> {
    pub fn with_classifier(backend: B, classifier: C) -> Self {
        DiaryStore {
            backend,
            classifier,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Loads the user's collection.
    ///
    /// Never fails: a missing record is an empty collection, a malformed entry
    /// is skipped, and an unreadable or corrupt document is logged and treated as
    /// empty.
    pub fn load(&self, user: &UserId) -> DiaryCollection {
        match self.load_existing(user) {
            Ok(collection) => collection,
            Err(e) => {
                warn!(user = %user, error = %e, "Failed to read stored diary, using an empty one");
                DiaryCollection::new()
            }
        }
    }

    /// Classifies `content` and stores it as the user's entry for `date_key`.
    ///
    /// An existing entry for the same day is replaced. The collection is
    /// persisted before this returns.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::EmptyContent` if `content` is empty or whitespace;
    /// nothing is stored in that case. Backend failures while reading or writing
    /// are returned as-is and leave the stored diary unchanged.
    pub fn write(&self, user: &UserId, date_key: DateKey, content: &str) -> AppResult<DiaryEntry> {
        if content.trim().is_empty() {
            return Err(DiaryError::EmptyContent.into());
        }

        let emotion = self.classifier.classify(content);
        let entry = DiaryEntry {
            date_key,
            content: content.to_string(),
            emotion,
        };

        let mut collection = self.load_for_update(user)?;
        let previous = collection.upsert(entry.clone());

        if previous.as_ref() == Some(&entry) {
            debug!(user = %user, date = %date_key, "Entry unchanged, skipping save");
            return Ok(entry);
        }

        self.persist(user, &collection)?;
        info!(
            user = %user,
            date = %date_key,
            emotion = %emotion,
            edited = previous.is_some(),
            "Diary entry saved"
        );
        Ok(entry)
    }

    /// Returns the user's entry for `date_key`, if any.
    pub fn read(&self, user: &UserId, date_key: &DateKey) -> Option<DiaryEntry> {
        self.load(user).get(date_key).cloned()
    }

    fn load_existing(&self, user: &UserId) -> AppResult<DiaryCollection> {
        let key = StorageKey::entries(user);
        match self.backend.load(&key)? {
            Some(payload) => {
                let collection: DiaryCollection = serde_json::from_str(&payload)?;
                debug!(user = %user, entries = collection.len(), "Loaded diary");
                Ok(collection)
            }
            None => {
                debug!(user = %user, "No stored diary");
                Ok(DiaryCollection::new())
            }
        }
    }

    // Corrupt data is replaced on the next write, but a failing backend must not
    // be mistaken for an empty diary and overwritten.
    fn load_for_update(&self, user: &UserId) -> AppResult<DiaryCollection> {
        let key = StorageKey::entries(user);
        let Some(payload) = self.backend.load(&key)? else {
            return Ok(DiaryCollection::new());
        };

        match serde_json::from_str(&payload) {
            Ok(collection) => Ok(collection),
            Err(e) => {
                warn!(user = %user, error = %e, "Stored diary is corrupt, starting a new one");
                Ok(DiaryCollection::new())
            }
        }
    }

    fn persist(&self, user: &UserId, collection: &DiaryCollection) -> AppResult<()> {
        let payload = serde_json::to_string(collection)?;
        self.backend.save(&StorageKey::entries(user), &payload)
    }
}
