/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Comparison result color:
/// -1 (cell earlier) → yellow
///  0 (same instant) → green
///  1 (cell later)   → red
pub fn color_for_sign(sign: i8) -> &'static str {
    match sign {
        s if s < 0 => YELLOW,
        0 => GREEN,
        _ => RED,
    }
}
