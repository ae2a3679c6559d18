pub mod clear;
pub mod config;
pub mod currency;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod rate;
pub mod set;
pub mod week;

use crate::config::Config;
use crate::core::timesheet::Timesheet;
use crate::db::store::{SnapshotStore, SqliteStore};
use crate::errors::AppResult;

/// Open the configured database and load the timesheet from it.
pub(crate) fn open_timesheet(cfg: &Config) -> AppResult<Timesheet<SqliteStore>> {
    let store = SqliteStore::open(&cfg.database)?;
    let ts = Timesheet::load_with_ttl(store, cfg.status_ttl_secs);
    show_status(&ts);
    Ok(ts)
}

/// Print the current status line if it has not expired yet.
pub(crate) fn show_status<S: SnapshotStore>(ts: &Timesheet<S>) {
    if let Some(status) = ts.visible_status() {
        status.print();
    }
}
