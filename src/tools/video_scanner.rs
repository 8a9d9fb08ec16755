use crate::config::VideoExtensionTable;
use crate::error::CleanerError;
use anyhow::Result;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 遞迴掃描資料夾下所有影片檔，依走訪順序回傳
///
/// 根目錄無法讀取時回傳 `FilesystemUnavailable`；子項目讀取失敗只記錄警告並略過
pub fn scan_video_files(
    directory: &Path,
    extension_table: &VideoExtensionTable,
) -> Result<Vec<PathBuf>> {
    let mut video_files = Vec::new();

    for entry in WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                return Err(CleanerError::FilesystemUnavailable {
                    path: directory.to_path_buf(),
                    source,
                }
                .into());
            }
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if entry.file_type().is_file() && extension_table.is_video_file(entry.path()) {
            video_files.push(entry.into_path());
        }
    }

    Ok(video_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_filters_and_recurses() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("Season 1");
        fs::create_dir_all(&nested).unwrap();

        fs::write(temp_dir.path().join("b movie.mp4"), b"x").unwrap();
        fs::write(temp_dir.path().join("a movie.AVI"), b"x").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(nested.join("S01E01 Pilot.mkv"), b"x").unwrap();
        fs::write(nested.join("S01E01 Pilot.srt"), b"x").unwrap();

        let table = Config::new().unwrap().video_extension_table;
        let files = scan_video_files(temp_dir.path(), &table).unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        // 依檔名排序走訪，子資料夾 "Season 1" 排在小寫檔名之前
        assert_eq!(names, vec!["S01E01 Pilot.mkv", "a movie.AVI", "b movie.mp4"]);
        assert_eq!(files[0], nested.join("S01E01 Pilot.mkv"));
        assert!(files.iter().all(|p| p.starts_with(temp_dir.path())));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let table = Config::new().unwrap().video_extension_table;
        let files = scan_video_files(temp_dir.path(), &table).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does_not_exist");
        let table = Config::new().unwrap().video_extension_table;

        let err = scan_video_files(&missing, &table).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CleanerError>(),
            Some(CleanerError::FilesystemUnavailable { .. })
        ));
    }
}
