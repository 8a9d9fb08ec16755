use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 預設相似度門檻（含等於）
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoExtensionTable {
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl VideoExtensionTable {
    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        self.video_file
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect()
    }

    /// 副檔名比對不分大小寫（`.MP4` 與 `.mp4` 視為相同）
    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        let video_extensions = self.video_extensions_set();
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| video_extensions.contains(&format!(".{}", ext.to_lowercase())))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub video_extension_table: VideoExtensionTable,
    pub similarity_threshold: f64,
}
