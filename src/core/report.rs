//! Text rendering of a week and its earnings.

use crate::core::calculator::{Totals, WeekWindow, daily_gross};
use crate::models::currency::Currency;
use crate::models::ledger::TimeLedger;
use crate::models::settings::Settings;
use crate::ui::messages::{field, header};
use crate::utils::colors::{colorize_amount, colorize_hours};
use crate::utils::date::format_short;
use crate::utils::formatting::{bold, format_amount, format_hours, pad_left, pad_right};

const DAY_W: usize = 10;
const DATE_W: usize = 7;
const HOURS_W: usize = 8;
const AMOUNT_W: usize = 16;

pub struct ReportLogic;

impl ReportLogic {
    /// Print settings, the seven days of `week` and the nine totals.
    pub fn print_week(
        ledger: &TimeLedger,
        settings: &Settings,
        week: &WeekWindow,
        totals: &Totals,
    ) {
        let currency = Currency::for_display(&settings.currency);

        header(format!("Week {}", week.label()));

        field(
            "Hourly rate",
            format!("{}/hour", format_amount(settings.hourly_rate, currency)),
        );
        field("Tax rate", format!("{}%", settings.tax_rate));
        field(
            "Currency",
            format!("{} {} ({})", currency.symbol, currency.name, settings.currency),
        );
        println!();

        println!(
            "{}",
            bold(&format!(
                "{}{}{}{}{}{}",
                pad_right("Day", DAY_W),
                pad_right("Date", DATE_W),
                pad_left("Normal", HOURS_W),
                pad_left("OT 1.5x", HOURS_W),
                pad_left("OT 2.0x", HOURS_W),
                pad_left("Gross", AMOUNT_W),
            ))
        );

        for day in week.days() {
            let entry = ledger.get_date(day).copied().unwrap_or_default();
            let gross = daily_gross(&entry, settings.hourly_rate);

            println!(
                "{}{}{}{}{}{}",
                pad_right(&day.format("%A").to_string(), DAY_W),
                pad_right(&format_short(day), DATE_W),
                colorize_hours(&pad_left(&format_hours(entry.normal), HOURS_W)),
                colorize_hours(&pad_left(&format_hours(entry.ot50), HOURS_W)),
                colorize_hours(&pad_left(&format_hours(entry.ot100), HOURS_W)),
                colorize_amount(&pad_left(&format_amount(gross, currency), AMOUNT_W), gross),
            );
        }

        println!();
        Self::print_totals(totals, currency);
    }

    /// Gross / tax / net table for week, month and year.
    pub fn print_totals(totals: &Totals, currency: &Currency) {
        println!(
            "{}",
            bold(&format!(
                "{}{}{}{}",
                pad_right("Period", DAY_W),
                pad_left("Gross", AMOUNT_W),
                pad_left("Tax", AMOUNT_W),
                pad_left("Net", AMOUNT_W),
            ))
        );

        let rows = [
            ("Week", totals.week_total, totals.week_tax, totals.week_net),
            ("Month", totals.month_total, totals.month_tax, totals.month_net),
            ("Year", totals.year_total, totals.year_tax, totals.year_net),
        ];

        for (label, gross, tax, net) in rows {
            println!(
                "{}{}{}{}",
                pad_right(label, DAY_W),
                pad_left(&format_amount(gross, currency), AMOUNT_W),
                pad_left(&format_amount(tax, currency), AMOUNT_W),
                colorize_amount(&pad_left(&format_amount(net, currency), AMOUNT_W), net),
            );
        }
    }
}
