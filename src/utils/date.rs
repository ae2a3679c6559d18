use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Canonical layout of a ledger date key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

static DATE_KEY_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Zero-padded `YYYY-MM-DD` key for a calendar date.
pub fn date_key(d: NaiveDate) -> String {
    d.format(DATE_KEY_FORMAT).to_string()
}

/// Strict key parser: exactly four digits, dash, two digits, dash, two
/// digits, naming a real calendar day. Anything else is `None`.
pub fn parse_date_key(s: &str) -> Option<NaiveDate> {
    if !DATE_KEY_SHAPE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_KEY_FORMAT).ok()
}

/// Parse a date typed on the command line. Accepts the strict key layout
/// plus the `today` shortcut.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        return Some(today());
    }
    parse_date_key(s.trim())
}

/// `Jan 6` style short date.
pub fn format_short(d: NaiveDate) -> String {
    d.format("%b %-d").to_string()
}

/// `Jan 6, 2025` style date with year.
pub fn format_with_year(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}
