// src/export/mod.rs

pub mod fs_utils;
mod json;
pub mod logic;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use std::path::Path;

/// Default file name of an exported snapshot.
pub const DEFAULT_EXPORT_FILE: &str = "timesheet-data.json";

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
