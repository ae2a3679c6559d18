//! Formatting utilities used for CLI output.

use crate::models::currency::Currency;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-align `s` in `width` terminal columns (counts `€`, `¥` as one).
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Right-align `s` in `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{s}", " ".repeat(pad))
}

/// Two decimals with `,` thousands grouping: `1234.5` → `1,234.50`.
pub fn group_thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

/// Amount with the currency symbol: `$1,234.50`, or `1,234.50 lei` for RON.
pub fn format_amount(amount: f64, currency: &Currency) -> String {
    let formatted = group_thousands(amount);
    if currency.symbol_after() {
        format!("{formatted} {}", currency.symbol)
    } else {
        format!("{}{formatted}", currency.symbol)
    }
}

/// Hours without a useless fractional part: `8`, `7.5`, `0.25`.
pub fn format_hours(h: f64) -> String {
    if h == 0.0 {
        "-".to_string()
    } else if h.fract() == 0.0 {
        format!("{h:.0}")
    } else {
        let s = format!("{h:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
