//! Month views over a diary collection.
//!
//! Months are zero-based throughout (January = 0), matching the usual calendar
//! library convention. Grid layout (leading blank cells, week rows) is left to
//! the caller; a [`MonthView`] only provides the first weekday, the number of
//! days and one [`DayCell`] per day.

use crate::constants::{DEFAULT_PERIOD_MONTH, DEFAULT_PERIOD_YEAR, MONTHS_PER_YEAR};
use crate::diary::{DateKey, DiaryCollection, DiaryEntry};
use crate::errors::DiaryError;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// A calendar month: a year and a zero-based month.
///
/// Only months whose days chrono can represent are constructible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    first: NaiveDate,
}

impl Period {
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidMonth` when `month` is not in `0..=11`, and
    /// `DiaryError::InvalidPeriod` when `year` is outside chrono's date range.
    pub fn new(year: i32, month: u32) -> Result<Self, DiaryError> {
        if month >= MONTHS_PER_YEAR {
            return Err(DiaryError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month + 1, 1)
            .map(|first| Period { first })
            .ok_or(DiaryError::InvalidPeriod { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Period {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    /// Parses a selector label such as `"2025년 6월"` (one-based month in the label).
    ///
    /// Unparseable labels fall back to June 2025.
    ///
    /// ```
    /// use emodiary::calendar::Period;
    ///
    /// let period = Period::parse_label("2024년 12월");
    /// assert_eq!((period.year(), period.month()), (2024, 11));
    ///
    /// let fallback = Period::parse_label("last month");
    /// assert_eq!((fallback.year(), fallback.month()), (2025, 5));
    /// ```
    pub fn parse_label(label: &str) -> Self {
        Self::try_parse_label(label).unwrap_or_else(Period::fallback)
    }

    fn try_parse_label(label: &str) -> Option<Self> {
        let (year_part, rest) = label.trim().split_once('년')?;
        let month_part = rest.trim().strip_suffix('월')?;

        let year = year_part.trim().parse::<i32>().ok()?;
        let month = month_part.trim().parse::<u32>().ok()?;
        Period::new(year, month.checked_sub(1)?).ok()
    }

    fn fallback() -> Self {
        let first = NaiveDate::from_ymd_opt(DEFAULT_PERIOD_YEAR, DEFAULT_PERIOD_MONTH + 1, 1)
            .unwrap_or_default();
        Period::containing(first)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Zero-based month.
    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Key for a day of this month, if the day exists.
    pub fn day(&self, day: u32) -> Option<DateKey> {
        DateKey::from_ymd0(self.year(), self.month(), day)
    }

    pub fn days_in_month(&self) -> u32 {
        let month = self.month();
        self.first
            .iter_days()
            .take_while(|date| date.month0() == month)
            .count() as u32
    }

    /// Weekday of the first day, counted from Sunday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// The month before this one; stays put at the start of the calendar range.
    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Period { first })
            .unwrap_or(*self)
    }

    /// The month after this one; stays put at the end of the calendar range.
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Period { first })
            .unwrap_or(*self)
    }

    /// Korean label, e.g. `"2025년 6월"`.
    pub fn label(&self) -> String {
        format!("{}년 {}월", self.year(), self.month() + 1)
    }

    /// Short Korean month name, e.g. `"6월"`.
    pub fn month_label(&self) -> String {
        format!("{}월", self.month() + 1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month() + 1)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Period", 2)?;
        state.serialize_field("year", &self.year())?;
        state.serialize_field("month", &self.month())?;
        state.end()
    }
}

/// One day of a month view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date_key: DateKey,
    pub entry: Option<DiaryEntry>,
    pub is_today: bool,
}

/// The days of a month with their entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub period: Period,
    /// Weekday of day 1, Sunday = 0.
    pub first_weekday: u32,
    pub days_in_month: u32,
    pub cells: Vec<DayCell>,
}

impl MonthView {
    pub fn year(&self) -> i32 {
        self.period.year()
    }

    pub fn month(&self) -> u32 {
        self.period.month()
    }

    /// The cell for a day of the month, 1-based.
    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        day.checked_sub(1)
            .and_then(|index| self.cells.get(index as usize))
    }

    /// Number of days with an entry.
    pub fn entry_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.entry.is_some()).count()
    }

    pub fn previous(&self) -> Period {
        self.period.previous()
    }

    pub fn next(&self) -> Period {
        self.period.next()
    }
}

/// Builds the view of `(year, month)` from a collection.
///
/// `today` only drives the `is_today` flags and is passed in so the result is
/// deterministic.
///
/// # Errors
///
/// Returns `DiaryError::InvalidMonth` when `month` is not in `0..=11`, or
/// `DiaryError::InvalidPeriod` for a year chrono cannot represent.
///
/// # Examples
///
/// ```
/// use emodiary::calendar::month_view;
/// use emodiary::DiaryCollection;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
/// let view = month_view(&DiaryCollection::new(), 2025, 1, today).unwrap();
///
/// assert_eq!(view.days_in_month, 28);
/// assert_eq!(view.first_weekday, 6); // 2025-02-01 is a Saturday
/// assert!(view.cell(14).unwrap().is_today);
/// ```
pub fn month_view(
    collection: &DiaryCollection,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<MonthView, DiaryError> {
    let period = Period::new(year, month)?;
    Ok(period_view(collection, period, today))
}

/// Same as [`month_view`] for an already validated period.
pub fn period_view(collection: &DiaryCollection, period: Period, today: NaiveDate) -> MonthView {
    let days_in_month = period.days_in_month();

    let cells = (1..=days_in_month)
        .filter_map(|day| period.day(day).map(|date_key| (day, date_key)))
        .map(|(day, date_key)| DayCell {
            day,
            date_key,
            entry: collection.get(&date_key).cloned(),
            is_today: date_key.date() == today,
        })
        .collect();

    MonthView {
        period,
        first_weekday: period.first_weekday(),
        days_in_month,
        cells,
    }
}
