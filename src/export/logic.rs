// src/export/logic.rs

use crate::core::timesheet::Timesheet;
use crate::db::store::SnapshotStore;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::{read_json, write_json};
use crate::export::notify_export_success;
use std::path::Path;
use tracing::info;

/// File transfer of the whole timesheet.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the current snapshot to `file`.
    ///
    /// An existing file is only replaced with `force` or after the user
    /// confirms.
    pub fn export<S: SnapshotStore>(ts: &Timesheet<S>, file: &Path, force: bool) -> AppResult<()> {
        ensure_writable(file, force)?;

        let bytes = ts.export_snapshot()?;
        write_json(file, &bytes)?;

        info!(path = %file.display(), bytes = bytes.len(), "snapshot exported");
        notify_export_success("JSON", file);
        Ok(())
    }

    /// Replace the timesheet with the content of `file`.
    ///
    /// The file is read completely first; a read failure or an invalid
    /// payload leaves the current state as it was.
    pub fn import<S: SnapshotStore>(ts: &mut Timesheet<S>, file: &Path) -> AppResult<()> {
        let bytes = read_json(file)?;
        ts.import_snapshot(&bytes)?;

        info!(path = %file.display(), days = ts.ledger().len(), "snapshot imported");
        Ok(())
    }
}
