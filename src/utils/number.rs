//! Lenient numeric parsing for values typed by the user.

use regex::Regex;
use std::sync::LazyLock;

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

/// Parse the leading float of `raw`, ignoring any trailing garbage.
///
/// Input with no numeric prefix, `NaN`, `Infinity`, values that overflow
/// `f64` and negative zero all yield `0.0`, so "nothing usable" and "zero"
/// are the same value downstream. The result is always finite.
///
/// ```
/// use rtimesheet::utils::number::parse_or_zero;
/// assert_eq!(parse_or_zero("7.5h"), 7.5);
/// assert_eq!(parse_or_zero("abc"), 0.0);
/// assert_eq!(parse_or_zero("-2"), -2.0);
/// assert_eq!(parse_or_zero("1e400"), 0.0);
/// ```
pub fn parse_or_zero(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let Some(m) = LEADING_FLOAT.find(trimmed) else {
        return 0.0;
    };

    let value = m.as_str().parse::<f64>().unwrap_or(0.0);

    if !value.is_finite() || value == 0.0 {
        0.0
    } else {
        value
    }
}
