//! Print a month grid.

use crate::calendar::{period_view, DayCell, MonthView, Period};
use crate::constants::DAYS_PER_WEEK;
use crate::diary::{DiaryStore, UserId};
use crate::emotion::EmotionClassifier;
use crate::storage::BlobStore;
use chrono::NaiveDate;

const WEEKDAY_NAMES: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Renders the user's diary for `period` as a Sunday-first month grid.
pub fn show_calendar<B: BlobStore, C: EmotionClassifier>(
    store: &DiaryStore<B, C>,
    user: &UserId,
    period: Period,
    today: NaiveDate,
) -> String {
    let view = period_view(&store.load(user), period, today);
    render_month(&view)
}

/// Each cell is five columns wide: a right-aligned day number (prefixed with
/// `*` for today) and the entry's glyph, or blanks.
pub fn render_month(view: &MonthView) -> String {
    let mut lines = vec![view.period.label()];

    lines.push(
        WEEKDAY_NAMES
            .iter()
            .map(|name| format!(" {}  ", name))
            .collect::<String>()
            .trim_end()
            .to_string(),
    );

    let mut row = "     ".repeat(view.first_weekday as usize);
    let mut column = view.first_weekday;
    for cell in &view.cells {
        row.push_str(&render_cell(cell));
        column += 1;
        if column == DAYS_PER_WEEK {
            lines.push(row.trim_end().to_string());
            row.clear();
            column = 0;
        }
    }
    if !row.is_empty() {
        lines.push(row.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push(format!(
        "Entries: {} · ◀ {} | {} ▶",
        view.entry_count(),
        view.previous().label(),
        view.next().label()
    ));

    lines.join("\n")
}

fn render_cell(cell: &DayCell) -> String {
    let day = if cell.is_today {
        format!("*{}", cell.day)
    } else {
        cell.day.to_string()
    };
    let glyph = cell.entry.as_ref().map(|entry| entry.glyph()).unwrap_or("  ");
    format!("{:>3}{}", day, glyph)
}
