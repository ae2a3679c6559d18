use crate::cli::commands::{open_timesheet, show_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::currency::Currency;
use crate::models::day_entry::HourField;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::formatting::{format_amount, format_hours};

/// Record hours for one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date,
        normal,
        ot50,
        ot100,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let key = date::date_key(d);

        let updates: Vec<(HourField, &String)> = [
            (HourField::Normal, normal),
            (HourField::Ot50, ot50),
            (HourField::Ot100, ot100),
        ]
        .into_iter()
        .filter_map(|(f, v)| v.as_ref().map(|v| (f, v)))
        .collect();

        if updates.is_empty() {
            warning("Nothing to set: use --normal, --ot50 and/or --ot100.");
            return Ok(());
        }

        let mut ts = open_timesheet(cfg)?;

        for (field, raw) in updates {
            let result = ts.set_hours(&key, field, raw);
            show_status(&ts);
            result?;
        }

        match ts.ledger().get(&key) {
            Some(entry) => {
                let currency = Currency::for_display(&ts.settings().currency);
                success(format!(
                    "{key}: normal {}, ot50 {}, ot100 {} → {}",
                    format_hours(entry.normal),
                    format_hours(entry.ot50),
                    format_hours(entry.ot100),
                    format_amount(entry.gross(ts.settings().hourly_rate), currency)
                ));
            }
            None => info(format!("{key}: no hours recorded")),
        }
    }

    Ok(())
}
