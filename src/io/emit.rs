use anyhow::Result;
use std::io::Write;

use crate::split::DecomposeResult;

/// 写出一条分解记录：类 FASTA 头部（周期、单体数、得分）+
/// 一行以空格分隔的片段。
pub fn write_record<W: Write>(w: &mut W, header: &str, result: &DecomposeResult) -> Result<()> {
    writeln!(
        w,
        ">{} period={} monomers={} score={:.3}",
        header,
        result.period,
        result.decomposition.len(),
        result.score
    )?;
    writeln!(w, "{}", result.decomposition.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::decompose_auto;

    #[test]
    fn record_format() {
        let res = decompose_auto(&"ACGT".repeat(10));
        let mut out: Vec<u8> = Vec::new();
        write_record(&mut out, "arr1", &res).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            ">arr1 period=4 monomers=10 score=1.000"
        );
        assert_eq!(lines.next().unwrap(), ["ACGT"; 10].join(" "));
        assert!(lines.next().is_none());
    }

    #[test]
    fn empty_decomposition_writes_empty_payload() {
        let res = decompose_auto("");
        let mut out: Vec<u8> = Vec::new();
        write_record(&mut out, "arr0", &res).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, ">arr0 period=0 monomers=0 score=0.000\n\n");
    }
}
