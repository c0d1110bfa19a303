//! 串联重复数组分解流水线：
//! 锚点碱基 → FS 树 → 提示提取 → 切割序列选择 → 第一遍切分 → 第二遍细化。

pub mod cut;
pub mod pass1;
pub mod pass2;

pub use cut::{select_cut, CutResult};
pub use pass1::{fragment_bounds, pass1};
pub use pass2::{most_common_monomer, refine};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::index::{extract_hints, FsTree};
use crate::util::dist::DistBuffer;
use crate::util::dna;

/// 默认的最大提示长度
pub const DEFAULT_DEPTH: usize = 500;

/// 单体直方图：片段字符串 -> 在分解中出现的次数
pub type MonomerHistogram = HashMap<String, u32>;

/// 一次分解的完整结果。各片段按原序拼接恰好还原输入数组。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecomposeResult {
    pub decomposition: Vec<String>,
    pub histogram: MonomerHistogram,
    pub cut_seq: String,
    pub score: f64,
    pub period: usize,
}

pub fn build_histogram(decomp: &[String]) -> MonomerHistogram {
    let mut histogram = MonomerHistogram::new();
    for f in decomp {
        *histogram.entry(f.clone()).or_insert(0) += 1;
    }
    histogram
}

/// 按数组长度自适应的支持度下限
pub fn adaptive_cutoff(len: usize) -> usize {
    if len > 1_000_000 {
        1000
    } else if len > 100_000 {
        250
    } else if len > 10_000 {
        10
    } else {
        3
    }
}

/// `decompose` 的便捷入口：默认深度 + 自适应 cutoff。
pub fn decompose_auto(array: &str) -> DecomposeResult {
    decompose(array, DEFAULT_DEPTH, adaptive_cutoff(array.len()))
}

/// 将串联重复数组分解为单体片段序列。
///
/// 空数组返回空分解（period = 0）；长度 1 返回平凡分解。
/// 其余输入经完整流水线处理，第二遍细化迭代至不动点。
pub fn decompose(array: &str, depth: usize, cutoff: usize) -> DecomposeResult {
    if array.is_empty() {
        return DecomposeResult {
            decomposition: Vec::new(),
            histogram: MonomerHistogram::new(),
            cut_seq: String::new(),
            score: 0.0,
            period: 0,
        };
    }
    if array.len() == 1 {
        let decomposition = vec![array.to_string()];
        return DecomposeResult {
            histogram: build_histogram(&decomposition),
            decomposition,
            cut_seq: array.to_string(),
            score: 0.0,
            period: 1,
        };
    }

    let bytes = array.as_bytes();
    let anchor = dna::anchor_base(bytes);
    let stream = FsTree::new(bytes, anchor, cutoff);
    let hints = extract_hints(bytes, stream, depth);
    let cut = select_cut(bytes, &hints);

    let mut decomp = pass1(array, &cut.cut_seq, cut.period);

    // 细化至不动点；分解中没有周期长度的片段时无法选单体，直接停止
    let mut buf = DistBuffer::new();
    loop {
        let Some(monomer) = most_common_monomer(&decomp, cut.period) else {
            break;
        };
        let monomer = monomer.to_string();
        let (next, changed) = refine(&decomp, cut.period, &monomer, &mut buf);
        decomp = next;
        if !changed {
            break;
        }
    }

    DecomposeResult {
        histogram: build_histogram(&decomp),
        decomposition: decomp,
        cut_seq: cut.cut_seq,
        score: cut.score,
        period: cut.period,
    }
}
