//! Widget primitives and shared visual helpers for console pages.

#![allow(missing_docs)]

/// Horizontal bar glyph used by the material breakdown chart.
pub const BAR_CHAR: char = '█';

/// Render a fixed-width percentage bar from `0.0..=100.0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent_bar(pct: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let clamped = pct.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width);
    for _ in 0..filled {
        bar.push(BAR_CHAR);
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

/// Truncate a string to `max` characters, appending an ellipsis when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Checkbox glyph for selection columns.
#[must_use]
pub const fn selection_mark(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

/// Cursor glyph for the active row.
#[must_use]
pub const fn cursor_mark(under_cursor: bool) -> &'static str {
    if under_cursor { "▸" } else { " " }
}

/// Human-readable "n minutes/hours ago" label for the activity feed.
#[must_use]
pub fn minutes_ago_label(minutes: u32) -> String {
    if minutes == 0 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else {
        let hours = minutes / 60;
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{hours} hours ago")
        }
    }
}

/// Format integer cents as a dollar amount.
#[must_use]
pub fn dollars(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
