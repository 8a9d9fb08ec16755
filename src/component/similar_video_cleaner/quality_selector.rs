//! 從一組配對中選出品質較差（要刪除）的檔案

use super::similarity_matcher::CandidatePair;
use crate::error::CleanerError;
use crate::tools::BitrateProvider;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairSide {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// 位元率較低
    LowerBitrate,
    /// 位元率相同，另一個檔名以 "s" 開頭（帶有季/集資訊），保留它
    KeepSeasonInfo,
    /// 位元率相同且無法判斷，刪除配對中的第一個
    FirstOfTie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub worse: PathBuf,
    pub side: PairSide,
    pub reason: SelectionReason,
    pub first_bitrate: u64,
    pub second_bitrate: u64,
}

/// 依位元率與檔名判斷哪一邊較差
#[must_use]
pub fn pick_worse(
    first: &Path,
    first_bitrate: u64,
    second: &Path,
    second_bitrate: u64,
) -> (PairSide, SelectionReason) {
    if first_bitrate < second_bitrate {
        return (PairSide::First, SelectionReason::LowerBitrate);
    }
    if second_bitrate < first_bitrate {
        return (PairSide::Second, SelectionReason::LowerBitrate);
    }

    if has_season_prefix(first) {
        (PairSide::Second, SelectionReason::KeepSeasonInfo)
    } else if has_season_prefix(second) {
        (PairSide::First, SelectionReason::KeepSeasonInfo)
    } else {
        (PairSide::First, SelectionReason::FirstOfTie)
    }
}

fn has_season_prefix(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .is_some_and(|name| name.starts_with('s'))
}

pub struct QualitySelector<P> {
    provider: P,
}

impl<P: BitrateProvider> QualitySelector<P> {
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// 讀取兩個檔案的位元率並選出較差者；呼叫端需先確認兩個檔案都還存在
    pub fn choose_worse(&self, pair: &CandidatePair) -> Result<Selection, CleanerError> {
        let first_bitrate = self.provider.encoding_bitrate(&pair.first)?;
        let second_bitrate = self.provider.encoding_bitrate(&pair.second)?;

        let (side, reason) = pick_worse(&pair.first, first_bitrate, &pair.second, second_bitrate);
        let worse = match side {
            PairSide::First => pair.first.clone(),
            PairSide::Second => pair.second.clone(),
        };

        Ok(Selection {
            worse,
            side,
            reason,
            first_bitrate,
            second_bitrate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedBitrates(HashMap<PathBuf, u64>);

    impl BitrateProvider for FixedBitrates {
        fn encoding_bitrate(&self, path: &Path) -> Result<u64, CleanerError> {
            self.0
                .get(path)
                .copied()
                .ok_or_else(|| CleanerError::MetadataUnavailable {
                    path: path.to_path_buf(),
                    reason: "unknown file".to_string(),
                })
        }
    }

    fn pair(first: &str, second: &str) -> CandidatePair {
        CandidatePair {
            first: PathBuf::from(first),
            second: PathBuf::from(second),
            first_key: String::new(),
            second_key: String::new(),
            score: 1.0,
        }
    }

    #[test]
    fn test_lower_bitrate_is_worse_regardless_of_name() {
        assert_eq!(
            pick_worse(Path::new("S01 a.mp4"), 1000, Path::new("b.mp4"), 2000),
            (PairSide::First, SelectionReason::LowerBitrate)
        );
        assert_eq!(
            pick_worse(Path::new("a.mp4"), 2000, Path::new("S01 b.mp4"), 1000),
            (PairSide::Second, SelectionReason::LowerBitrate)
        );
    }

    #[test]
    fn test_tie_keeps_season_name() {
        assert_eq!(
            pick_worse(Path::new("/tv/S02E03.mp4"), 500, Path::new("/tv/MyShow.mp4"), 500),
            (PairSide::Second, SelectionReason::KeepSeasonInfo)
        );
        assert_eq!(
            pick_worse(Path::new("/tv/MyShow.mp4"), 500, Path::new("/tv/S02E03.mp4"), 500),
            (PairSide::First, SelectionReason::KeepSeasonInfo)
        );
    }

    #[test]
    fn test_tie_checks_file_name_not_directory() {
        assert_eq!(
            pick_worse(Path::new("/shows/MyShow.mp4"), 1, Path::new("/shows/Other.mkv"), 1),
            (PairSide::First, SelectionReason::FirstOfTie)
        );
    }

    #[test]
    fn test_tie_both_season_names_deletes_second() {
        assert_eq!(
            pick_worse(Path::new("s01 x.mp4"), 7, Path::new("S01 x.mkv"), 7),
            (PairSide::Second, SelectionReason::KeepSeasonInfo)
        );
    }

    #[test]
    fn test_choose_worse_with_provider() {
        let provider = FixedBitrates(HashMap::from([
            (PathBuf::from("fileA.mp4"), 1000),
            (PathBuf::from("fileB.mp4"), 2000),
        ]));
        let selector = QualitySelector::new(provider);

        let selection = selector.choose_worse(&pair("fileA.mp4", "fileB.mp4")).unwrap();
        assert_eq!(selection.worse, PathBuf::from("fileA.mp4"));
        assert_eq!(selection.side, PairSide::First);
        assert_eq!(selection.first_bitrate, 1000);
        assert_eq!(selection.second_bitrate, 2000);
    }

    #[test]
    fn test_choose_worse_equal_bitrate_tie_break() {
        let provider = FixedBitrates(HashMap::from([
            (PathBuf::from("S02E03.mp4"), 3000),
            (PathBuf::from("MyShow.mp4"), 3000),
        ]));
        let selector = QualitySelector::new(provider);

        let selection = selector.choose_worse(&pair("S02E03.mp4", "MyShow.mp4")).unwrap();
        assert_eq!(selection.worse, PathBuf::from("MyShow.mp4"));
        assert_eq!(selection.reason, SelectionReason::KeepSeasonInfo);
    }

    #[test]
    fn test_missing_metadata_propagates() {
        let provider = FixedBitrates(HashMap::from([(PathBuf::from("a.mp4"), 1)]));
        let selector = QualitySelector::new(provider);

        let err = selector.choose_worse(&pair("a.mp4", "broken.mkv")).unwrap_err();
        assert!(matches!(err, CleanerError::MetadataUnavailable { .. }));
    }
}
