//! Earnings aggregation.
//!
//! Totals are never stored: callers recompute them from the current ledger
//! and settings on every read.

pub mod week;

use crate::models::day_entry::DayEntry;
use crate::models::ledger::TimeLedger;
use crate::models::settings::Settings;
use tracing::debug;
pub use week::WeekWindow;

/// Gross, tax and net amounts for the week, month and year of a window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub week_total: f64,
    pub month_total: f64,
    pub year_total: f64,
    pub week_tax: f64,
    pub month_tax: f64,
    pub year_tax: f64,
    pub week_net: f64,
    pub month_net: f64,
    pub year_net: f64,
}

/// Gross pay for one day. Kept as a free function so the formula has a
/// single home: `normal*r + ot50*r*1.5 + ot100*r*2.0`.
pub fn daily_gross(entry: &DayEntry, rate: f64) -> f64 {
    entry.gross(rate)
}

/// Aggregate `ledger` into week/month/year gross, tax and net.
///
/// - week: the seven days of `week`, missing days count as zero
/// - month/year: every entry whose key is a valid `YYYY-MM-DD` date in the
///   window's reference year (and month). Malformed keys are skipped.
///
/// Pure and deterministic.
pub fn compute_totals(
    ledger: &TimeLedger,
    rate: f64,
    tax_rate_percent: f64,
    week: &WeekWindow,
) -> Totals {
    let week_total: f64 = week
        .date_keys()
        .iter()
        .filter_map(|k| ledger.get(k))
        .map(|e| daily_gross(e, rate))
        .sum();

    let year = week.reference_year();
    let month = week.reference_month();

    let year_total: f64 = ledger
        .entries_in_year(year)
        .map(|(_, e)| daily_gross(e, rate))
        .sum();
    let month_total: f64 = ledger
        .entries_in_month(year, month)
        .map(|(_, e)| daily_gross(e, rate))
        .sum();

    let skipped = ledger.len() - ledger.dated_entries().count();
    if skipped > 0 {
        debug!(skipped, "ignored ledger keys that are not valid dates");
    }

    let tax_fraction = tax_rate_percent / 100.0;
    let week_tax = week_total * tax_fraction;
    let month_tax = month_total * tax_fraction;
    let year_tax = year_total * tax_fraction;

    Totals {
        week_total,
        month_total,
        year_total,
        week_tax,
        month_tax,
        year_tax,
        week_net: week_total - week_tax,
        month_net: month_total - month_tax,
        year_net: year_total - year_tax,
    }
}

/// [`compute_totals`] using the rate and tax of `settings`.
pub fn totals_for(ledger: &TimeLedger, settings: &Settings, week: &WeekWindow) -> Totals {
    compute_totals(ledger, settings.hourly_rate, settings.tax_rate, week)
}
