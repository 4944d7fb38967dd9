//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to a display width; emoji and CJK count as two columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Horizontal bar proportional to `value / max`, at least one block for non-zero values.
pub fn bar(value: usize, max: usize, width: usize) -> String {
    if value == 0 || max == 0 || width == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(len.clamp(1, width))
}

/// "09:00" style label for an hour of the day.
pub fn hour_label(hour: u32) -> String {
    format!("{hour:02}:00")
}
