//! Formatting helpers shared by the dashboard views

use tabled::{settings::Style, Table, Tabled};
use unicode_width::UnicodeWidthStr;

/// Render rows as a rounded table, or `empty` when there are none
pub fn render_table<T: Tabled>(rows: &[T], empty: &str) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Progress bar `width` cells wide, filled to `percent` of 100
pub fn format_bar(percent: f64, width: usize) -> String {
    if percent <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// A label and value on one line, label padded to `width` characters
pub fn labeled(label: &str, value: impl std::fmt::Display, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(label));
    format!("{}{}  {}", label, " ".repeat(pad), value)
}

/// Title followed by a rule of the same width
pub fn format_header(title: &str) -> String {
    format!("{}\n{}", title, separator(UnicodeWidthStr::width(title).max(20)))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        "...".chars().take(max_chars).collect()
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}
