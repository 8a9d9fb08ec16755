//! 清理流程中會中止執行的錯誤分類
//!
//! 過期的配對（其中一個檔案已被先前的配對刪除）不屬於錯誤，只會被略過

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Directory is missing or unreadable: {}", path.display())]
    FilesystemUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read video encoding bitrate of {}: {reason}", path.display())]
    MetadataUnavailable { path: PathBuf, reason: String },

    #[error("Failed to delete {}", path.display())]
    DeletionFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
