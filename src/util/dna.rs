pub const BASES: [u8; 4] = [b'A', b'C', b'G', b'T']; // 排序固定：A < C < G < T

#[inline]
pub fn base_code(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None, // N 等未知符号：背景字符，不参与锚点与扩展
    }
}

pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq {
        let up = b.to_ascii_uppercase();
        let nb = match up {
            b'A' | b'C' | b'G' | b'T' | b'N' => up,
            b'U' => b'T',
            _ => b'N',
        };
        out.push(nb);
    }
    out
}

pub fn base_counts(seq: &[u8]) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for &b in seq {
        if let Some(c) = base_code(b) {
            counts[c] += 1;
        }
    }
    counts
}

/// 选择锚点核苷酸：出现次数最多的碱基，计数相同时取字典序靠前者。
pub fn anchor_base(seq: &[u8]) -> u8 {
    let counts = base_counts(seq);
    let mut best = 0usize;
    for c in 1..4 {
        if counts[c] > counts[best] {
            best = c;
        }
    }
    BASES[best]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_maps_unknown_to_n() {
        assert_eq!(normalize_seq(b"acgu"), b"ACGT");
        assert_eq!(normalize_seq(b"AxC-T"), b"ANCNT");
    }

    #[test]
    fn anchor_is_most_frequent_base() {
        assert_eq!(anchor_base(b"ACGTTT"), b'T');
        assert_eq!(anchor_base(b"GGGCC"), b'G');
    }

    #[test]
    fn anchor_ties_break_lexicographically() {
        // 四碱基等频 -> A
        assert_eq!(anchor_base(b"ACGTACGT"), b'A');
        assert_eq!(anchor_base(b"TTGG"), b'G');
    }

    #[test]
    fn anchor_of_background_only_is_a() {
        // 无 ACGT 符号时所有计数为 0，回落到 A
        assert_eq!(anchor_base(b"NNNN"), b'A');
        assert_eq!(anchor_base(b""), b'A');
    }

    #[test]
    fn base_counts_ignore_background() {
        assert_eq!(base_counts(b"ANCNG"), [1, 1, 1, 0]);
    }
}
