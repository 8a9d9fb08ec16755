//! 字串相似度計算
//!
//! 以最長共同區塊（Ratcliff/Obershelp）遞迴找出所有匹配區塊，
//! 相似度 = 2 * 匹配字元數 / 兩字串總長度

use std::collections::{HashMap, HashSet};

/// 第二個字串達到此長度才啟用「常見字元」過濾
const POPULAR_MIN_LEN: usize = 200;

/// 匹配區塊：`a[a_start..a_start + size] == b[b_start..b_start + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// b 中每個字元出現的位置（已排除常見字元）
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let b2j = Self::index_b(&b);
        Self { a, b, b2j }
    }

    fn index_b(b: &[char]) -> HashMap<char, Vec<usize>> {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, ch) in b.iter().enumerate() {
            b2j.entry(*ch).or_default().push(j);
        }

        let n = b.len();
        if n >= POPULAR_MIN_LEN {
            let limit = n / 100 + 1;
            let popular: HashSet<char> = b2j
                .iter()
                .filter(|(_, positions)| positions.len() > limit)
                .map(|(ch, _)| *ch)
                .collect();
            for ch in popular {
                b2j.remove(&ch);
            }
        }

        b2j
    }

    /// 在 `a[alo..ahi]` 與 `b[blo..bhi]` 中找出最長的共同區塊
    ///
    /// 長度相同時取 a 中最早出現者，再取 b 中最早出現者
    #[must_use]
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        let (a, b) = (&self.a, &self.b);
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = if j == 0 {
                        1
                    } else {
                        j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                    };
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // 常見字元不會出現在 b2j，這裡把相鄰的相同字元併入區塊
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchBlock {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    /// 依序回傳所有匹配區塊（不含結尾的零長度哨兵）
    #[must_use]
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            if alo < block.a_start && blo < block.b_start {
                queue.push((alo, block.a_start, blo, block.b_start));
            }
            let (a_end, b_end) = (block.a_start + block.size, block.b_start + block.size);
            if a_end < ahi && b_end < bhi {
                queue.push((a_end, ahi, b_end, bhi));
            }
            blocks.push(block);
        }

        blocks.sort_by_key(|block| (block.a_start, block.b_start));

        // 合併相鄰區塊
        let mut merged: Vec<MatchBlock> = Vec::with_capacity(blocks.len());
        for block in blocks {
            if let Some(last) = merged.last_mut() {
                if last.a_start + last.size == block.a_start
                    && last.b_start + last.size == block.b_start
                {
                    last.size += block.size;
                    continue;
                }
            }
            merged.push(block);
        }
        merged
    }

    /// 相似度，範圍 [0, 1]；兩個空字串視為完全相同
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|block| block.size).sum();
        (2 * matches) as f64 / total as f64
    }
}

/// 對稱的相似度：先將兩字串排序，確保 `similarity(a, b) == similarity(b, a)`
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    SequenceMatcher::new(first, second).ratio()
}
