use crate::cli::commands::open_timesheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let target = expand_tilde(file.as_deref().unwrap_or(&cfg.export_file));

        let ts = open_timesheet(cfg)?;
        ExportLogic::export(&ts, &target, *force)?;
    }
    Ok(())
}
