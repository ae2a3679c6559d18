/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Grey for an empty hour cell (`-`), default color otherwise.
pub fn colorize_hours(value: &str) -> String {
    if value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Amount color: positive green, negative red, zero grey.
pub fn colorize_amount(value: &str, amount: f64) -> String {
    if amount > 0.0 {
        format!("{GREEN}{value}{RESET}")
    } else if amount < 0.0 {
        format!("{RED}{value}{RESET}")
    } else {
        format!("{GREY}{value}{RESET}")
    }
}
