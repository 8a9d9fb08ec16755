//! 相似影片清理主模組
//!
//! 協調掃描、配對、選擇與刪除的整體流程

use super::quality_selector::{PairSide, QualitySelector, Selection, SelectionReason};
use super::similarity_matcher::{CandidatePair, SimilarityMatcher};
use crate::config::Config;
use crate::tools::{BitrateProvider, delete_file, scan_video_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use log::info;
use std::path::{Path, PathBuf};

/// 清理結果統計
#[derive(Debug, Default)]
pub struct CleanResult {
    pub total_files: usize,
    pub pairs_found: usize,
    pub deleted: Vec<PathBuf>,
    /// 其中一個檔案已被先前的配對刪除而略過的配對數
    pub stale_pairs_skipped: usize,
}

pub struct SimilarVideoCleaner<P> {
    config: Config,
    matcher: SimilarityMatcher,
    selector: QualitySelector<P>,
}

impl<P: BitrateProvider> SimilarVideoCleaner<P> {
    pub fn new(config: Config, provider: P) -> Self {
        let matcher = SimilarityMatcher::new(config.similarity_threshold);
        Self {
            config,
            matcher,
            selector: QualitySelector::new(provider),
        }
    }

    /// 執行一次完整的清理；任何位元率讀取或刪除失敗都會立即中止，已刪除的檔案不會還原
    pub fn run(&self, directory: &Path) -> Result<CleanResult> {
        validate_directory_exists(directory)?;
        info!("Scanning directory: {}", directory.display());

        let files = scan_video_files(directory, &self.config.video_extension_table)?;
        self.display_files(&files);

        let pairs = self.matcher.find_similar_pairs(&files);
        self.display_pairs(&pairs);

        let mut result = CleanResult {
            total_files: files.len(),
            pairs_found: pairs.len(),
            ..CleanResult::default()
        };

        // 配對只在開始時計算一次，逐一處理。三個以上的重複檔不會在刪除後重新比較
        // 誰最好，只會略過已失效的配對。
        for pair in &pairs {
            if !pair.first.exists() || !pair.second.exists() {
                info!(
                    "Skipping stale pair: {} / {}",
                    pair.first.display(),
                    pair.second.display()
                );
                result.stale_pairs_skipped += 1;
                continue;
            }

            let selection = self.selector.choose_worse(pair)?;
            self.display_selection(pair, &selection);

            delete_file(&selection.worse)?;
            println!("{} {}", style("deleted").red(), selection.worse.display());
            result.deleted.push(selection.worse);
        }

        self.display_summary(&result);
        Ok(result)
    }

    fn display_files(&self, files: &[PathBuf]) {
        println!(
            "{}",
            style(format!("Found {} video files:", files.len())).cyan()
        );
        for file in files {
            println!("  {}", file.display());
        }
    }

    fn display_pairs(&self, pairs: &[CandidatePair]) {
        for pair in pairs.iter().filter(|pair| !pair.is_exact()) {
            println!("   fileA: {}", pair.first_key);
            println!("   compared to:");
            println!("   fileB: {}", pair.second_key);
            println!("   score: {}", pair.score);
            println!();
        }

        println!(
            "{}",
            style(format!("Found {} similar pairs:", pairs.len())).cyan()
        );
        for pair in pairs {
            println!("  {} <-> {}", pair.first.display(), pair.second.display());
        }
    }

    fn display_selection(&self, pair: &CandidatePair, selection: &Selection) {
        println!("choosing between: ");
        println!("   fileA: {}", pair.first.display());
        println!("      bitrate: {}", selection.first_bitrate);
        println!("   fileB: {}", pair.second.display());
        println!("      bitrate: {}", selection.second_bitrate);

        let label = match selection.side {
            PairSide::First => "fileA",
            PairSide::Second => "fileB",
        };
        let rationale = match selection.reason {
            SelectionReason::LowerBitrate => format!("{label} has lower bitrate, delete it!"),
            SelectionReason::KeepSeasonInfo => format!(
                "same bitrate, keeping the name with season information, delete {label}!"
            ),
            SelectionReason::FirstOfTie => format!("same bitrate, delete {label}!"),
        };
        println!("   {}", style(rationale).yellow());
    }

    fn display_summary(&self, result: &CleanResult) {
        println!();
        println!("{}", style("=== Summary ===").cyan().bold());
        println!("  Video files scanned: {}", result.total_files);
        println!("  Similar pairs: {}", style(result.pairs_found).yellow());
        println!("  Deleted: {}", style(result.deleted.len()).green());
        if result.stale_pairs_skipped > 0 {
            println!("  Stale pairs skipped: {}", result.stale_pairs_skipped);
        }

        info!(
            "Cleaning finished - files: {}, pairs: {}, deleted: {}, stale: {}",
            result.total_files,
            result.pairs_found,
            result.deleted.len(),
            result.stale_pairs_skipped
        );
    }
}
