use crate::error::CleanerError;
use anyhow::Result;
use log::info;
use std::fs;
use std::path::Path;

/// 永久刪除檔案（不經資源回收筒，不重試）
pub fn delete_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| CleanerError::DeletionFailure {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Deleted {}", path.display());
    Ok(())
}
