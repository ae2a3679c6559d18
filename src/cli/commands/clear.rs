use crate::cli::commands::{open_timesheet, show_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::fs_utils::confirm;
use crate::ui::messages::{info, warning};
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes {
            warning("This deletes ALL saved timesheet data and cannot be undone.");
            if !confirm("Are you sure?", &mut io::stdin().lock())? {
                info("Nothing was deleted.");
                return Ok(());
            }
        }

        let mut ts = open_timesheet(cfg)?;
        ts.clear();
        show_status(&ts);
    }
    Ok(())
}
