//! Sparse, date-keyed storage of recorded hours.

use crate::errors::{AppError, AppResult};
use crate::models::day_entry::{DayEntry, HourField};
use crate::utils::date::{self, DATE_KEY_FORMAT};
use crate::utils::number::parse_or_zero;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from `YYYY-MM-DD` date key to the hours of that day.
///
/// The ledger never holds an all-zero entry: every write path prunes a day
/// whose three fields become zero, so a missing key and "zero hours" mean
/// the same thing. Keys loaded from external data are kept verbatim even when
/// they are not valid dates; consumers filter them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeLedger {
    days: BTreeMap<String, DayEntry>,
}

impl TimeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from raw entries, dropping the all-zero ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, DayEntry)>,
    {
        let days = entries
            .into_iter()
            .filter(|(_, e)| !e.is_empty())
            .collect();
        Self { days }
    }

    /// Validated write of one hour field.
    ///
    /// `raw` is parsed leniently (see [`parse_or_zero`]). A negative value is
    /// rejected and leaves the ledger untouched. Returns the entry now stored
    /// for `key`, or `None` when the write pruned it.
    pub fn set_hours(
        &mut self,
        key: &str,
        field: HourField,
        raw: &str,
    ) -> AppResult<Option<DayEntry>> {
        let value = parse_or_zero(raw);
        if value < 0.0 {
            return Err(AppError::NegativeHours);
        }

        let entry = self.days.entry(key.to_string()).or_default();
        entry.set(field, value);

        if entry.is_empty() {
            self.days.remove(key);
            return Ok(None);
        }

        Ok(Some(*entry))
    }

    pub fn get(&self, key: &str) -> Option<&DayEntry> {
        self.days.get(key)
    }

    pub fn get_date(&self, d: NaiveDate) -> Option<&DayEntry> {
        self.days.get(&d.format(DATE_KEY_FORMAT).to_string())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.days.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All stored entries, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DayEntry)> {
        self.days.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries whose key is a well-formed calendar date, with that date.
    pub fn dated_entries(&self) -> impl Iterator<Item = (NaiveDate, &DayEntry)> {
        self.days
            .iter()
            .filter_map(|(k, v)| date::parse_date_key(k).map(|d| (d, v)))
    }

    pub fn entries_in_year(&self, year: i32) -> impl Iterator<Item = (NaiveDate, &DayEntry)> {
        self.dated_entries().filter(move |(d, _)| d.year() == year)
    }

    pub fn entries_in_month(
        &self,
        year: i32,
        month: u32,
    ) -> impl Iterator<Item = (NaiveDate, &DayEntry)> {
        self.dated_entries()
            .filter(move |(d, _)| d.year() == year && d.month() == month)
    }
}
