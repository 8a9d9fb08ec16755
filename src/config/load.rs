use crate::config::types::{Config, DEFAULT_SIMILARITY_THRESHOLD, VideoExtensionTable};
use anyhow::{Context, Result, bail};

/// 編譯時嵌入的影片副檔名表（不需要外部檔案）
const VIDEO_EXTENSIONS_JSON: &str = include_str!("../data/video_extensions.json");

impl Config {
    pub fn new() -> Result<Self> {
        let video_extension_table = Self::load_embedded_extension_table()?;

        Ok(Self {
            video_extension_table,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        })
    }

    /// 覆寫相似度門檻，必須落在 [0, 1]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            bail!("Similarity threshold must be within [0, 1], got {threshold}");
        }
        self.similarity_threshold = threshold;
        Ok(self)
    }

    fn load_embedded_extension_table() -> Result<VideoExtensionTable> {
        serde_json::from_str(VIDEO_EXTENSIONS_JSON)
            .context("Failed to parse embedded video extension table")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_embedded_table_loads() {
        let config = Config::new().unwrap();
        let extensions = config.video_extension_table.video_extensions_set();
        for ext in [".mov", ".avi", ".mpg", ".mkv", ".mp4", ".wmv", ".flv"] {
            assert!(extensions.contains(ext), "missing {ext}");
        }
        assert_eq!(extensions.len(), 7);
        assert!((config.similarity_threshold - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_is_video_file_ignores_case() {
        let table = Config::new().unwrap().video_extension_table;
        assert!(table.is_video_file(Path::new("/movies/A Film.MKV")));
        assert!(table.is_video_file(Path::new("clip.Mp4")));
        assert!(table.is_video_file(Path::new("old.mov")));
        assert!(!table.is_video_file(Path::new("notes.txt")));
        assert!(!table.is_video_file(Path::new("mkv")));
        assert!(!table.is_video_file(Path::new("subs.srt")));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        assert!(Config::new().unwrap().with_similarity_threshold(1.5).is_err());
        assert!(Config::new().unwrap().with_similarity_threshold(-0.1).is_err());
        let config = Config::new().unwrap().with_similarity_threshold(1.0).unwrap();
        assert!((config.similarity_threshold - 1.0).abs() < f64::EPSILON);
    }
}
