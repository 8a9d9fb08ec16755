//! 相似影片清理元件
//!
//! 四階段流程：
//! A. 掃描影片檔
//! B. 以檔名相似度配對
//! C. 比較位元率，選出較差的檔案
//! D. 刪除較差的檔案

mod main;
mod quality_selector;
mod similarity_matcher;

pub use main::{CleanResult, SimilarVideoCleaner};
pub use quality_selector::{PairSide, QualitySelector, Selection, SelectionReason, pick_worse};
pub use similarity_matcher::{CandidatePair, SimilarityMatcher, comparison_key};
