use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Write an exported snapshot to disk.
pub fn write_json(path: &Path, bytes: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Read a whole import file before anything touches the current state.
pub fn read_json(path: &Path) -> AppResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        AppError::InvalidImport(format!("cannot read '{}': {e}", path.display()))
    })
}
