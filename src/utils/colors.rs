//! ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Success rate color: ≥ 70% green, < 40% red, otherwise yellow.
pub fn color_for_rate(rate: f64) -> &'static str {
    if rate >= 0.7 {
        GREEN
    } else if rate < 0.4 {
        RED
    } else {
        YELLOW
    }
}

/// GREY for "nothing here" placeholders, RESET otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "N/A" || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
