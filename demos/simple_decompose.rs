//! 演示如何在 library 模式下使用 satsplit-rust 分解串联重复数组。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_decompose
//! ```

use satsplit_rust::index::{extract_hints, FsTree};
use satsplit_rust::split;
use satsplit_rust::util::dna;

fn main() {
    // 1. 构造一个带点突变的串联重复数组：单体 ACGT × 10，第 6 个拷贝为 ACAT
    let mut array = String::new();
    for i in 0..10 {
        array.push_str(if i == 5 { "ACAT" } else { "ACGT" });
    }
    println!("输入数组: {}", array);
    println!("数组长度: {} bp", array.len());

    // 2. 锚点与频繁子串提示
    let bytes = array.as_bytes();
    let anchor = dna::anchor_base(bytes);
    println!("\n锚点碱基: {}", anchor as char);

    let hints = extract_hints(bytes, FsTree::new(bytes, anchor, 3), split::DEFAULT_DEPTH);
    println!("提示数: {}", hints.len());
    for h in hints.iter().take(5) {
        println!("  L={} seq={} 支持度={}", h.len, h.seq, h.count);
    }

    // 3. 完整分解
    let res = split::decompose_auto(&array);
    println!("\n切割序列: {}", res.cut_seq);
    println!("周期: {}", res.period);
    println!("得分: {:.3}", res.score);
    println!("片段数: {}", res.decomposition.len());
    println!("分解: {}", res.decomposition.join(" "));

    // 4. 单体直方图
    println!("\n单体直方图:");
    let mut entries: Vec<(&String, &u32)> = res.histogram.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (seq, count) in entries {
        println!("  {} x{}", seq, count);
    }

    // 5. 还原检查
    assert_eq!(res.decomposition.concat(), array);
    println!("\n拼接还原: OK");
}
