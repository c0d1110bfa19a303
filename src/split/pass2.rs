use std::collections::HashMap;

use crate::util::dist::{levenshtein_with_buf, DistBuffer};

/// 超长判定阈值：片段长度 / 周期超过该值才尝试再切
const MAX_RATIO: f64 = 1.3;
/// 片段两端各探测的候选偏移数
const END_WINDOW: usize = 5;

/// 当前分解中长度恰为周期的最高频片段（平局取先出现者）。
pub fn most_common_monomer(decomp: &[String], period: usize) -> Option<&str> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new(); // seq -> (count, first_idx)
    for (idx, f) in decomp.iter().enumerate() {
        if f.len() != period {
            continue;
        }
        let entry = counts.entry(f.as_str()).or_insert((0, idx));
        entry.0 += 1;
    }

    let mut best: Option<(&str, usize, usize)> = None;
    for (&seq, &(count, first)) in &counts {
        let better = match best {
            None => true,
            Some((_, bc, bf)) => count > bc || (count == bc && first < bf),
        };
        if better {
            best = Some((seq, count, first));
        }
    }
    best.map(|(seq, _, _)| seq)
}

/// 第二遍细化：对超长片段在两端窗口内寻找与最常见单体
/// 编辑距离最小的周期长度窗口，距离小于半个周期即在该处切开。
/// 偏移 0 强制改为一个周期，保证最小切分长度。
/// 返回新分解与是否发生变化（片段数不同）。
pub fn refine(
    decomp: &[String],
    period: usize,
    monomer: &str,
    buf: &mut DistBuffer,
) -> (Vec<String>, bool) {
    let n = period;
    let mut out: Vec<String> = Vec::with_capacity(decomp.len());

    for f in decomp {
        let flen = f.len();
        if n == 0 || (flen as f64) / (n as f64) <= MAX_RATIO {
            out.push(f.clone());
            continue;
        }

        let slack = flen - n;
        let mut cands: Vec<usize> = (0..slack.min(END_WINDOW)).collect();
        for i in slack.saturating_sub(END_WINDOW)..=slack {
            if !cands.contains(&i) {
                cands.push(i);
            }
        }

        let fb = f.as_bytes();
        let mut best_i = cands[0];
        let mut best_d = usize::MAX;
        for &i in &cands {
            let d = levenshtein_with_buf(monomer.as_bytes(), &fb[i..i + n], buf);
            if d < best_d {
                best_d = d;
                best_i = i;
            }
        }

        if best_d * 2 < n {
            let at = if best_i == 0 { n } else { best_i };
            let (a, b) = f.split_at(at);
            if !a.is_empty() {
                out.push(a.to_string());
            }
            if !b.is_empty() {
                out.push(b.to_string());
            }
        } else {
            out.push(f.clone());
        }
    }

    let changed = out.len() != decomp.len();
    (out, changed)
}
