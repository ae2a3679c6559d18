use crate::utils::date::{date_key, format_short, format_with_year};
use chrono::{Datelike, Duration, NaiveDate};

pub const DAYS_PER_WEEK: i64 = 7;

/// A Monday-to-Sunday week, identified by its Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekWindow {
    monday: NaiveDate,
}

impl WeekWindow {
    /// The week containing `date`.
    ///
    /// With weekdays counted from Sunday = 0, the distance back to Monday is
    /// 6 days for a Sunday and `index - 1` days otherwise.
    pub fn containing(date: NaiveDate) -> Self {
        let index = date.weekday().num_days_from_sunday() as i64;
        let offset = if index == 0 { -6 } else { 1 - index };
        Self {
            monday: date + Duration::days(offset),
        }
    }

    pub fn current() -> Self {
        Self::containing(crate::utils::date::today())
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn sunday(&self) -> NaiveDate {
        self.monday + Duration::days(DAYS_PER_WEEK - 1)
    }

    /// Year and month the window reports against (those of its Monday).
    pub fn reference_year(&self) -> i32 {
        self.monday.year()
    }

    pub fn reference_month(&self) -> u32 {
        self.monday.month()
    }

    /// The seven dates of the week, Monday first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..DAYS_PER_WEEK).map(|i| self.monday + Duration::days(i))
    }

    pub fn date_keys(&self) -> Vec<String> {
        self.days().map(date_key).collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.monday && date <= self.sunday()
    }

    pub fn previous(&self) -> Option<Self> {
        self.shift(-1)
    }

    pub fn next(&self) -> Option<Self> {
        self.shift(1)
    }

    /// Move by `weeks` whole weeks (negative goes back).
    ///
    /// `None` when the target week does not fit the supported calendar
    /// range, Sunday included.
    pub fn shift(&self, weeks: i64) -> Option<Self> {
        let days = weeks.checked_mul(DAYS_PER_WEEK)?;
        let monday = self.monday.checked_add_signed(Duration::try_days(days)?)?;
        monday.checked_add_signed(Duration::days(DAYS_PER_WEEK - 1))?;
        Some(Self { monday })
    }

    /// `Jan 6 - Jan 12, 2025`, or `Dec 30, 2024 - Jan 5, 2025` when the week
    /// straddles a new year.
    pub fn label(&self) -> String {
        let start = self.monday;
        let end = self.sunday();
        if start.year() != end.year() {
            format!("{} - {}", format_with_year(start), format_with_year(end))
        } else {
            format!("{} - {}", format_short(start), format_with_year(end))
        }
    }
}
