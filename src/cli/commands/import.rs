use crate::cli::commands::{open_timesheet, show_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::error;
use crate::ui::status::StatusKind;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let source = expand_tilde(file);

        let mut ts = open_timesheet(cfg)?;
        let result = ExportLogic::import(&mut ts, &source);

        // a file that cannot be read never reaches the timesheet status
        if let Err(e) = &result
            && !ts
                .visible_status()
                .is_some_and(|s| s.kind == StatusKind::Error)
        {
            error(e);
        }
        show_status(&ts);
        result?;
    }
    Ok(())
}
