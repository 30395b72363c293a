//! Output formatting utilities

use crate::domain::{BreathingSnapshot, DayKey, JournalRecord, MonthGrid, MonthGridCell, EMOTIONS, TIPS};

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

const DAY_HEADER: &str = "Dom Lun Mar Mié Jue Vie Sáb";

/// Format a month grid for display: title, Sun..Sat header, then one line
/// per calendar week with the day number and its dominant emotion.
pub fn format_month_grid(grid: &MonthGrid) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} {}\n",
        MONTH_NAMES[(grid.month.month() - 1) as usize],
        grid.month.year()
    ));
    output.push_str(DAY_HEADER);
    output.push('\n');

    for (index, cell) in grid.cells.iter().enumerate() {
        match cell {
            MonthGridCell::Blank => output.push_str("    "),
            MonthGridCell::Day { number, emotion, .. } => match emotion {
                Some(emoji) => output.push_str(&format!("{:>2}{} ", number, emoji)),
                None => output.push_str(&format!("{:>2}  ", number)),
            },
        }
        if (index + 1) % 7 == 0 {
            output.push('\n');
        }
    }
    if grid.len() % 7 != 0 {
        output.push('\n');
    }

    output
}

/// Format a list of journal records for display
pub fn format_record_list(records: &[JournalRecord]) -> String {
    if records.is_empty() {
        return "No records found".to_string();
    }

    let mut output = String::new();
    for record in records {
        let id = record.id.as_deref().unwrap_or("-");
        let day = record
            .timestamp
            .as_deref()
            .and_then(DayKey::from_timestamp)
            .map(|k| k.to_string())
            .unwrap_or_else(|| "          ".to_string());
        let emoji = record.emotion_emoji.as_deref().unwrap_or("  ");
        output.push_str(&format!("{:>4}  {}  {}  {}\n", id, day, emoji, record.title));
    }
    output
}

/// Format the emotion catalog for display
pub fn format_emotion_list() -> String {
    let mut output = String::new();
    for emotion in EMOTIONS {
        output.push_str(&format!("{}  {}\n", emotion.emoji, emotion.name));
    }
    output
}

/// Format the tip catalog for display
pub fn format_tip_list() -> String {
    let mut output = String::new();
    for tip in TIPS {
        output.push_str(&format!("• {}\n", tip));
    }
    output
}

/// Format one breathing session tick for display
pub fn format_session_line(snapshot: &BreathingSnapshot) -> String {
    format!("{}  {}", snapshot.formatted_remaining(), snapshot.phase)
}
