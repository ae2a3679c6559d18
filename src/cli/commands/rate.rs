//! `rate` and `tax` commands.

use crate::cli::commands::{open_timesheet, show_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::currency::Currency;
use crate::ui::messages::success;
use crate::utils::formatting::format_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Rate { value } => {
            let mut ts = open_timesheet(cfg)?;
            let result = ts.set_rate(value);
            show_status(&ts);
            let rate = result?;

            let currency = Currency::for_display(&ts.settings().currency);
            success(format!("Hourly rate set to {}/hour", format_amount(rate, currency)));
        }
        Commands::Tax { value } => {
            let mut ts = open_timesheet(cfg)?;
            let result = ts.set_tax_rate(value);
            show_status(&ts);
            let tax = result?;

            success(format!("Tax rate set to {tax}%"));
        }
        _ => {}
    }

    Ok(())
}
