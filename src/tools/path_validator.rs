use crate::error::CleanerError;
use anyhow::Result;
use std::io;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CleanerError::FilesystemUnavailable {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "path does not exist"),
        }
        .into());
    }
    if !path.is_dir() {
        return Err(CleanerError::FilesystemUnavailable {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path is not a directory"),
        }
        .into());
    }
    Ok(())
}
