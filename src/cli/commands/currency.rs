use crate::cli::commands::{open_timesheet, show_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::currency::{CURRENCIES, Currency};
use crate::ui::messages::success;
use crate::utils::formatting::{pad_left, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Currency { code } => {
            let mut ts = open_timesheet(cfg)?;
            ts.set_currency(code);
            show_status(&ts);

            let c = Currency::for_display(code);
            success(format!("Currency set to {} {} ({})", c.symbol, c.name, c.code));
        }
        Commands::Currencies => {
            for c in CURRENCIES.iter() {
                println!(
                    "{}  {}  {}",
                    pad_right(c.code, 4),
                    pad_left(c.symbol, 4),
                    c.name
                );
            }
        }
        _ => {}
    }

    Ok(())
}
