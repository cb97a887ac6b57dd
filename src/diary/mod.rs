//! Diary data model: date keys, user ids, entries and per-user collections.
//!
//! A [`DiaryCollection`] belongs to exactly one [`UserId`] and holds at most one
//! [`DiaryEntry`] per [`DateKey`]. Collections are persisted as a JSON object
//! mapping `YYYY-MM-DD` to `{dateKey, content, emotion}`.

pub mod store;

pub use store::DiaryStore;

use crate::constants::{DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, MAX_USER_ID_LEN};
use crate::emotion::{presentation_for, EmotionCategory, Presentation};
use crate::errors::DiaryError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A calendar day, the natural identifier of a diary entry.
///
/// Always rendered as zero-padded `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use emodiary::DateKey;
///
/// let key: DateKey = "20250601".parse().unwrap();
/// assert_eq!(key.to_string(), "2025-06-01");
/// assert_eq!(key.month0(), 5);
///
/// assert!("2025-02-30".parse::<DateKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Builds a key from a year, a zero-based month and a day of month.
    pub fn from_ymd0(year: i32, month0: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day).map(DateKey)
    }

    /// Parses `YYYY-MM-DD` or `YYYYMMDD`.
    pub fn parse(input: &str) -> Result<Self, DiaryError> {
        let trimmed = input.trim();
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT_ISO)
            .or_else(|_| NaiveDate::parse_from_str(trimmed, DATE_FORMAT_COMPACT))
            .map(DateKey)
            .map_err(|_| DiaryError::InvalidDateKey(input.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (January = 0).
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// True when this day falls inside the given year and zero-based month.
    pub fn is_in_month(&self, year: i32, month0: u32) -> bool {
        self.year() == year && self.month0() == month0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT_ISO))
    }
}

impl FromStr for DateKey {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateKey::parse(s)
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for DateKey {
    type Error = DiaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DateKey::parse(&value)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

/// Opaque identifier of the logged-in user, used to scope stored diaries.
///
/// Identifiers are limited to ASCII letters, digits, `-`, `_`, `.` and `@`, may not
/// start with `.`, and are at most 64 characters long, so they are safe to embed in
/// file names and storage keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Result<Self, DiaryError> {
        let id = id.into();
        let valid_chars = id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'));

        if id.is_empty() || id.len() > MAX_USER_ID_LEN || !valid_chars || id.starts_with('.') {
            return Err(DiaryError::InvalidUserId(id));
        }
        Ok(UserId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::new(s)
    }
}

/// One day's diary record.
///
/// The glyph and image key are not fields: they are derived from `emotion` on
/// demand, so a change to the presentation table never leaves stale data behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    #[serde(alias = "date")]
    pub date_key: DateKey,
    pub content: String,
    pub emotion: EmotionCategory,
}

impl DiaryEntry {
    pub fn presentation(&self) -> Presentation {
        presentation_for(self.emotion)
    }

    pub fn glyph(&self) -> &'static str {
        self.presentation().glyph
    }

    pub fn image_key(&self) -> &'static str {
        self.presentation().image_key
    }
}

/// All diary entries of a single user, keyed by day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiaryCollection {
    entries: BTreeMap<DateKey, DiaryEntry>,
}

impl DiaryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection keyed by each entry's own date key.
    ///
    /// When several entries share a date key, the last one wins.
    pub fn from_entries<I: IntoIterator<Item = DiaryEntry>>(entries: I) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.date_key, entry))
            .collect();
        DiaryCollection { entries }
    }

    pub fn get(&self, date_key: &DateKey) -> Option<&DiaryEntry> {
        self.entries.get(date_key)
    }

    /// Inserts or replaces the entry for its day and returns the previous one.
    pub fn upsert(&mut self, entry: DiaryEntry) -> Option<DiaryEntry> {
        self.entries.insert(entry.date_key, entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in date order.
    pub fn entries(&self) -> impl Iterator<Item = &DiaryEntry> {
        self.entries.values()
    }

    /// Entries whose day falls inside the given year and zero-based month.
    pub fn entries_in_month(&self, year: i32, month0: u32) -> impl Iterator<Item = &DiaryEntry> {
        self.entries
            .values()
            .filter(move |entry| entry.date_key.is_in_month(year, month0))
    }
}

impl Serialize for DiaryCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

// Records are parsed one by one: a malformed record is skipped with a warning
// instead of failing the whole collection. Entries are re-keyed by their own
// date so a hand-edited map key can never break the one-entry-per-day invariant.
impl<'de> Deserialize<'de> for DiaryCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let entries = records.into_iter().filter_map(|(key, record)| {
            match serde_json::from_value::<DiaryEntry>(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(key = %key, error = %e, "Skipping malformed diary record");
                    None
                }
            }
        });
        Ok(DiaryCollection::from_entries(entries))
    }
}
