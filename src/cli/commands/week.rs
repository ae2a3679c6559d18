use crate::cli::commands::open_timesheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::WeekWindow;
use crate::core::report::ReportLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date, offset } = cmd {
        let base = match date {
            Some(s) => WeekWindow::containing(
                date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            ),
            None => WeekWindow::current(),
        };
        let week = base
            .shift(*offset)
            .ok_or(AppError::WeekOutOfRange(*offset))?;

        let ts = open_timesheet(cfg)?;
        let totals = ts.totals(&week);

        ReportLogic::print_week(ts.ledger(), ts.settings(), &week, &totals);
    }

    Ok(())
}
