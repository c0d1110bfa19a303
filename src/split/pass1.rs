/// 切割序列的非重叠出现位置（自左向右贪心）。
pub fn cut_positions(array: &[u8], cut: &[u8]) -> Vec<usize> {
    let mut out = Vec::new();
    if cut.is_empty() || cut.len() > array.len() {
        return out;
    }
    let mut i = 0usize;
    while i + cut.len() <= array.len() {
        if &array[i..i + cut.len()] == cut {
            out.push(i);
            i += cut.len();
        } else {
            i += 1;
        }
    }
    out
}

/// 以切割序列出现位置划分数组，返回片段区间 [start, end)。
/// 首个出现之前的前缀（若非空）单独成段；其后每段都以切割序列开头，
/// 因此各段拼接恰好还原整个数组。
pub fn fragment_bounds(array: &[u8], cut: &[u8]) -> Vec<(usize, usize)> {
    if array.is_empty() {
        return Vec::new();
    }
    let positions = cut_positions(array, cut);
    if positions.is_empty() {
        return vec![(0, array.len())];
    }

    let mut bounds = Vec::with_capacity(positions.len() + 1);
    if positions[0] > 0 {
        bounds.push((0, positions[0]));
    }
    for w in positions.windows(2) {
        bounds.push((w[0], w[1]));
    }
    bounds.push((positions[positions.len() - 1], array.len()));
    bounds
}

/// 第一遍切分：按切割序列划段，段长为周期的非平凡整数倍时
/// 再均分为周期长度的切片，其余段原样保留（留给第二遍处理）。
pub fn pass1(array: &str, cut: &str, period: usize) -> Vec<String> {
    let bounds = fragment_bounds(array.as_bytes(), cut.as_bytes());
    let mut decomp = Vec::with_capacity(bounds.len());
    for (s, e) in bounds {
        let flen = e - s;
        if period > 0 && flen != period && flen % period == 0 {
            let mut p = s;
            while p < e {
                decomp.push(array[p..p + period].to_string());
                p += period;
            }
        } else {
            decomp.push(array[s..e].to_string());
        }
    }
    decomp
}
