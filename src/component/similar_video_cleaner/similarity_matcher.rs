//! 檔名相似度配對
//!
//! 比較前先去掉副檔名與檔名的第一個字（通常是光碟編號或集數標籤）

use crate::tools::similarity;
use log::debug;
use std::path::{Path, PathBuf};

/// 可能是同一部影片的兩個檔案
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePair {
    pub first: PathBuf,
    pub second: PathBuf,
    pub first_key: String,
    pub second_key: String,
    pub score: f64,
}

impl CandidatePair {
    /// 比較用的名稱完全相同（只有副檔名不同）
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.first_key == self.second_key
    }
}

/// 取得比較用名稱：去掉目錄與副檔名後，丟棄第一個空白前的字
///
/// 沒有空白時整個檔名就是比較用名稱
#[must_use]
pub fn comparison_key(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match stem.split_once(char::is_whitespace) {
        Some((first, "")) => first.to_string(),
        Some((_, rest)) => rest.to_string(),
        None => stem,
    }
}

pub struct SimilarityMatcher {
    threshold: f64,
}

impl SimilarityMatcher {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// 兩兩比較所有檔案（O(n²)），依發現順序回傳配對
    ///
    /// 同一個檔案可能出現在多個配對中，不做分群
    #[must_use]
    pub fn find_similar_pairs(&self, files: &[PathBuf]) -> Vec<CandidatePair> {
        let keys: Vec<String> = files.iter().map(|path| comparison_key(path)).collect();
        let mut pairs = Vec::new();

        for i in 0..files.len() {
            // 包含 i == j，由副檔名規則排除自己
            for j in i..files.len() {
                let score = similarity(&keys[i], &keys[j]);
                if !self.is_match(&keys[i], &keys[j], score, &files[i], &files[j]) {
                    continue;
                }

                debug!(
                    "Matched {:?} / {:?} (score {score:.4})",
                    keys[i], keys[j]
                );
                pairs.push(CandidatePair {
                    first: files[i].clone(),
                    second: files[j].clone(),
                    first_key: keys[i].clone(),
                    second_key: keys[j].clone(),
                    score,
                });
            }
        }

        pairs
    }

    fn is_match(&self, key_a: &str, key_b: &str, score: f64, a: &Path, b: &Path) -> bool {
        if key_a == key_b {
            // 名稱與副檔名都相同：自己比自己，或無法處理的完全重名
            a.extension() != b.extension()
        } else {
            score >= self.threshold
        }
    }
}
