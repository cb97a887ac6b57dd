//! Print the statistics of a month.

use crate::calendar::Period;
use crate::diary::{DiaryStore, UserId};
use crate::emotion::EmotionClassifier;
use crate::errors::AppResult;
use crate::stats::radar::RadarChart;
use crate::stats::{aggregate, PeriodStats};
use crate::storage::BlobStore;
use serde::Serialize;

const BAR_WIDTH: f64 = 10.0;

/// Machine-readable statistics: the raw [`PeriodStats`] plus derived metrics
/// and the radar chart geometry.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub label: String,
    #[serde(flatten)]
    pub stats: PeriodStats,
    pub diversity: usize,
    pub weekly_average: f64,
    pub message: String,
    pub radar: RadarChart,
}

impl StatsReport {
    pub fn new(stats: PeriodStats, period: Period) -> Self {
        StatsReport {
            label: period.label(),
            diversity: stats.diversity(),
            weekly_average: stats.weekly_average(),
            message: stats.monthly_message(),
            radar: RadarChart::from_stats(&stats),
            stats,
        }
    }
}

/// Aggregates the user's entries in `period` and renders them as a summary,
/// or as pretty-printed JSON when `json` is set.
///
/// # Errors
///
/// Returns `AppError::Serialization` if the JSON report cannot be produced.
pub fn show_stats<B: BlobStore, C: EmotionClassifier>(
    store: &DiaryStore<B, C>,
    user: &UserId,
    period: Period,
    json: bool,
) -> AppResult<String> {
    let stats = aggregate(&store.load(user), period.year(), period.month());

    if json {
        let report = StatsReport::new(stats, period);
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    Ok(render_summary(&stats, period))
}

fn render_summary(stats: &PeriodStats, period: Period) -> String {
    let mut lines = vec![period.label()];

    if let Some(modal) = stats.modal_emotion {
        lines.push(format!(
            "Entries: {} ({} per week)",
            stats.total,
            stats.weekly_average()
        ));
        lines.push(format!("Distinct emotions: {}", stats.diversity()));
        lines.push(format!(
            "Most frequent: {} {} ({})",
            modal.presentation().glyph,
            modal.label(),
            modal
        ));
        lines.push(String::new());

        for &emotion in &stats.display_emotions {
            let percentage = stats.percentage(emotion);
            let bar = "█".repeat((percentage / 100.0 * BAR_WIDTH).round() as usize);
            lines.push(format!(
                "{} {:<10} {:>3}  {:<10} {:>3.0}%",
                emotion.presentation().glyph,
                emotion.to_string(),
                stats.count(emotion),
                bar,
                percentage
            ));
        }
        lines.push(String::new());
    }

    lines.push(stats.monthly_message());
    lines.join("\n")
}
