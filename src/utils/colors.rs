//! ANSI color helper utilities for terminal output.

use crate::models::category::Category;
use crate::models::priority::Priority;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// HIGH → red, MEDIUM → yellow, LOW → green
pub fn priority_color(p: Priority) -> &'static str {
    match p {
        Priority::High => RED,
        Priority::Medium => YELLOW,
        Priority::Low => GREEN,
    }
}

pub fn category_color(c: Category) -> &'static str {
    match c {
        Category::Work => BLUE,
        Category::Personal => MAGENTA,
        Category::Birthday => CYAN,
        Category::Meeting => YELLOW,
        Category::Appointment => GREEN,
        Category::Reminder => RED,
        Category::Other => RESET,
    }
}

/// Wrap `value` in `color` when coloring is enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled && color != RESET {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
