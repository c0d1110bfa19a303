use std::collections::HashMap;

use super::pass1::fragment_bounds;
use crate::index::Hint;

/// 切割序列选择结果。score 为片段长度命中主导周期的比例。
#[derive(Debug, Clone, PartialEq)]
pub struct CutResult {
    pub cut_seq: String,
    pub score: f64,
    pub period: usize,
}

/// 对每个候选提示试切一次，统计片段长度分布：
/// 最常见长度作为该提示的周期，命中比例作为得分。
/// 周期按提示逐个投票，得票最多者胜出（平局取先出现的周期）；
/// 胜出周期内再取得分最高的提示（平局取先出现的提示）。
/// 无任何提示时返回哨兵结果：以整个数组为切割序列、得分 0。
pub fn select_cut(array: &[u8], hints: &[Hint]) -> CutResult {
    // (period, hint 下标, score)，保持提示顺序
    let mut scored: Vec<(usize, usize, f64)> = Vec::new();

    for (hi, hint) in hints.iter().enumerate() {
        let bounds = fragment_bounds(array, hint.seq.as_bytes());
        if bounds.is_empty() {
            continue;
        }
        let Some((period, count)) = dominant_length(&bounds) else {
            continue;
        };
        let score = count as f64 / bounds.len() as f64;
        scored.push((period, hi, score));
    }

    if scored.is_empty() {
        return CutResult {
            cut_seq: String::from_utf8_lossy(array).into_owned(),
            score: 0.0,
            period: array.len(),
        };
    }

    // 周期投票，首见顺序保平局确定性
    let mut votes: Vec<(usize, usize)> = Vec::new();
    for &(period, _, _) in &scored {
        match votes.iter_mut().find(|v| v.0 == period) {
            Some(v) => v.1 += 1,
            None => votes.push((period, 1)),
        }
    }
    let mut winner = votes[0];
    for &v in &votes[1..] {
        if v.1 > winner.1 {
            winner = v;
        }
    }

    let mut best_hi = 0usize;
    let mut best_score = -1.0f64;
    for &(period, hi, score) in &scored {
        if period == winner.0 && score > best_score {
            best_hi = hi;
            best_score = score;
        }
    }

    CutResult {
        cut_seq: hints[best_hi].seq.clone(),
        score: best_score,
        period: winner.0,
    }
}

/// 片段长度频率表中的主导长度及其计数（平局取片段序上先出现者）。
fn dominant_length(bounds: &[(usize, usize)]) -> Option<(usize, usize)> {
    let mut freq: HashMap<usize, (usize, usize)> = HashMap::new(); // len -> (count, first_idx)
    for (idx, &(s, e)) in bounds.iter().enumerate() {
        let entry = freq.entry(e - s).or_insert((0, idx));
        entry.0 += 1;
    }
    let mut best: Option<(usize, usize, usize)> = None; // (len, count, first_idx)
    for (&len, &(count, first)) in &freq {
        let better = match best {
            None => true,
            Some((_, bc, bf)) => count > bc || (count == bc && first < bf),
        };
        if better {
            best = Some((len, count, first));
        }
    }
    best.map(|(len, count, _)| (len, count))
}
