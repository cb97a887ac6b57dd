//! Per-month emotion statistics.
//!
//! [`aggregate`] turns the entries of one month into a [`PeriodStats`]: raw
//! counts for every category, the modal emotion, and a chart profile in which
//! each category is scaled against the modal count (the modal emotion is always
//! 100). The profile is deliberately not a percent of the total; chart radii
//! depend on it.

pub mod radar;

use crate::constants::{MAX_DISPLAY_EMOTIONS, WEEKS_PER_PERIOD};
use crate::diary::DiaryCollection;
use crate::emotion::EmotionCategory;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Emotion distribution of one month.
///
/// `counts` and `percentages` always contain all seven categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStats {
    pub year: i32,
    /// Zero-based month.
    pub month: u32,
    pub counts: BTreeMap<EmotionCategory, usize>,
    pub total: usize,
    /// Most frequent emotion; ties go to the earlier category in enumeration order.
    pub modal_emotion: Option<EmotionCategory>,
    /// Count relative to the modal count, in `[0, 100]`.
    pub percentages: BTreeMap<EmotionCategory, f64>,
    /// Up to four categories with entries, most frequent first.
    pub display_emotions: Vec<EmotionCategory>,
}

impl PeriodStats {
    pub fn count(&self, emotion: EmotionCategory) -> usize {
        self.counts.get(&emotion).copied().unwrap_or(0)
    }

    pub fn percentage(&self, emotion: EmotionCategory) -> f64 {
        self.percentages.get(&emotion).copied().unwrap_or(0.0)
    }

    /// Number of distinct emotions that occurred.
    pub fn diversity(&self) -> usize {
        self.counts.values().filter(|&&count| count > 0).count()
    }

    /// Entries per week, treating every month as four weeks, to one decimal.
    pub fn weekly_average(&self) -> f64 {
        (self.total as f64 / WEEKS_PER_PERIOD * 10.0).round() / 10.0
    }

    /// One-line summary of the month, keyed on the modal emotion.
    pub fn monthly_message(&self) -> String {
        let month = format!("{}월", self.month + 1);

        let Some(modal) = self.modal_emotion else {
            return format!(
                "{}년 {}에는 아직 작성된 일기가 없습니다.",
                self.year, month
            );
        };

        match modal {
            EmotionCategory::Joy => format!("{}은 행복한 순간들이 많았던 달이네요! 😊", month),
            EmotionCategory::Sadness => {
                format!("{}은 조금 힘든 시간들이 있었던 것 같아요. 💙", month)
            }
            EmotionCategory::Anger => format!("{}은 스트레스가 많았던 달이었나 보네요. 😤", month),
            EmotionCategory::Surprise => {
                format!("{}은 예상치 못한 일들이 많았던 달이었네요! 😲", month)
            }
            EmotionCategory::Fear => format!("{}은 걱정이 많았던 달이었군요. 💪", month),
            EmotionCategory::Disgust => {
                format!("{}은 불쾌한 일들이 있었던 달이었네요. 🌈", month)
            }
            EmotionCategory::Neutral => {
                format!("{}은 평온하고 안정적인 달이었네요. 🕊️", month)
            }
        }
    }
}

/// Computes the statistics of `(year, month)` over a user's collection.
///
/// `month` is zero-based. A month without entries (including a month index
/// that cannot occur) yields all-zero statistics.
///
/// # Examples
///
/// ```
/// use emodiary::stats::aggregate;
/// use emodiary::{DiaryCollection, DiaryEntry, EmotionCategory};
///
/// let collection = DiaryCollection::from_entries([
///     DiaryEntry { date_key: "2025-06-01".parse()?, content: "a".into(), emotion: EmotionCategory::Joy },
///     DiaryEntry { date_key: "2025-06-02".parse()?, content: "b".into(), emotion: EmotionCategory::Joy },
///     DiaryEntry { date_key: "2025-06-03".parse()?, content: "c".into(), emotion: EmotionCategory::Fear },
/// ]);
///
/// let stats = aggregate(&collection, 2025, 5);
/// assert_eq!(stats.total, 3);
/// assert_eq!(stats.modal_emotion, Some(EmotionCategory::Joy));
/// assert_eq!(stats.percentage(EmotionCategory::Joy), 100.0);
/// assert_eq!(stats.percentage(EmotionCategory::Fear), 50.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn aggregate(collection: &DiaryCollection, year: i32, month: u32) -> PeriodStats {
    let mut counts: BTreeMap<EmotionCategory, usize> =
        EmotionCategory::ALL.iter().map(|&emotion| (emotion, 0)).collect();

    for entry in collection.entries_in_month(year, month) {
        *counts.entry(entry.emotion).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();

    let mut modal_emotion = None;
    let mut max_count = 0;
    for emotion in EmotionCategory::ALL {
        let count = counts[&emotion];
        if count > max_count {
            max_count = count;
            modal_emotion = Some(emotion);
        }
    }

    let percentages = counts
        .iter()
        .map(|(&emotion, &count)| {
            let percentage = if total > 0 && max_count > 0 {
                count as f64 / max_count as f64 * 100.0
            } else {
                0.0
            };
            (emotion, percentage)
        })
        .collect();

    let mut display_emotions: Vec<EmotionCategory> = EmotionCategory::ALL
        .into_iter()
        .filter(|emotion| counts[emotion] > 0)
        .collect();
    display_emotions.sort_by(|a, b| counts[b].cmp(&counts[a]));
    display_emotions.truncate(MAX_DISPLAY_EMOTIONS);

    debug!(
        year,
        month,
        total,
        modal = ?modal_emotion,
        "Aggregated period statistics"
    );

    PeriodStats {
        year,
        month,
        counts,
        total,
        modal_emotion,
        percentages,
        display_emotions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::DiaryEntry;
    use EmotionCategory::*;

    fn collection(entries: &[(&str, EmotionCategory)]) -> DiaryCollection {
        DiaryCollection::from_entries(entries.iter().map(|(date, emotion)| DiaryEntry {
            date_key: date.parse().unwrap(),
            content: "x".to_string(),
            emotion: *emotion,
        }))
    }

    #[test]
    fn test_empty_period_is_all_zero() {
        let stats = aggregate(&DiaryCollection::new(), 2025, 5);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.modal_emotion, None);
        assert_eq!(stats.counts.len(), 7);
        assert_eq!(stats.percentages.len(), 7);
        for emotion in EmotionCategory::ALL {
            assert_eq!(stats.count(emotion), 0);
            assert_eq!(stats.percentage(emotion), 0.0);
        }
        assert!(stats.display_emotions.is_empty());
        assert_eq!(stats.diversity(), 0);
        assert_eq!(stats.weekly_average(), 0.0);
    }

    #[test]
    fn test_percentages_scale_against_modal_count() {
        let stats = aggregate(
            &collection(&[
                ("2025-06-01", Joy),
                ("2025-06-02", Joy),
                ("2025-06-03", Joy),
                ("2025-06-04", Sadness),
            ]),
            2025,
            5,
        );

        assert_eq!(stats.total, 4);
        assert_eq!(stats.modal_emotion, Some(Joy));
        assert_eq!(stats.percentage(Joy), 100.0);
        assert!((stats.percentage(Sadness) - 33.333).abs() < 0.01);
        assert_eq!(stats.percentage(Anger), 0.0);
    }

    #[test]
    fn test_only_entries_in_period_are_counted() {
        let stats = aggregate(
            &collection(&[
                ("2025-05-31", Anger),
                ("2025-06-15", Fear),
                ("2025-07-01", Anger),
                ("2024-06-15", Anger),
            ]),
            2025,
            5,
        );

        assert_eq!(stats.total, 1);
        assert_eq!(stats.modal_emotion, Some(Fear));
        assert_eq!(stats.count(Anger), 0);
    }

    #[test]
    fn test_modal_ties_follow_enumeration_order() {
        let stats = aggregate(
            &collection(&[
                ("2025-06-01", Neutral),
                ("2025-06-02", Surprise),
                ("2025-06-03", Neutral),
                ("2025-06-04", Surprise),
            ]),
            2025,
            5,
        );

        assert_eq!(stats.modal_emotion, Some(Surprise));
        assert_eq!(stats.percentage(Surprise), 100.0);
        assert_eq!(stats.percentage(Neutral), 100.0);
    }

    #[test]
    fn test_display_emotions_sorted_and_truncated() {
        let stats = aggregate(
            &collection(&[
                ("2025-06-01", Neutral),
                ("2025-06-02", Neutral),
                ("2025-06-03", Neutral),
                ("2025-06-04", Disgust),
                ("2025-06-05", Fear),
                ("2025-06-06", Fear),
                ("2025-06-07", Anger),
                ("2025-06-08", Joy),
            ]),
            2025,
            5,
        );

        assert_eq!(stats.display_emotions, vec![Neutral, Fear, Joy, Anger]);
        assert_eq!(stats.diversity(), 5);
    }

    #[test]
    fn test_weekly_average_divides_by_four() {
        let entries: Vec<(String, EmotionCategory)> = (1..=10)
            .map(|day| (format!("2025-06-{:02}", day), Joy))
            .collect();
        let borrowed: Vec<(&str, EmotionCategory)> =
            entries.iter().map(|(d, e)| (d.as_str(), *e)).collect();

        let stats = aggregate(&collection(&borrowed), 2025, 5);
        assert_eq!(stats.weekly_average(), 2.5);

        let stats = aggregate(&collection(&borrowed[..1]), 2025, 5);
        assert_eq!(stats.weekly_average(), 0.3);
    }

    #[test]
    fn test_monthly_message() {
        let empty = aggregate(&DiaryCollection::new(), 2024, 11);
        assert_eq!(
            empty.monthly_message(),
            "2024년 12월에는 아직 작성된 일기가 없습니다."
        );

        let joyful = aggregate(&collection(&[("2025-06-01", Joy)]), 2025, 5);
        assert!(joyful.monthly_message().starts_with("6월은 행복한"));
    }

    #[test]
    fn test_serializes_with_emotion_names() {
        let stats = aggregate(&collection(&[("2025-06-01", Joy)]), 2025, 5);
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(value["counts"]["joy"], 1);
        assert_eq!(value["percentages"]["joy"], 100.0);
        assert_eq!(value["modal_emotion"], "joy");
    }
}
