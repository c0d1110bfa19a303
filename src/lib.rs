//! # satsplit-rust
//!
//! 卫星 DNA 阵列的从头分解器（de-novo satellite array decomposer）。
//!
//! 输入一条由近似相同的串联重复单体构成的 DNA 长串，本 crate 在未知
//! 单体周期的前提下发现周期并把数组切分为单体实例序列，容忍点突变、
//! 插入与缺失。核心流程：
//!
//! - **锚点选择**：取数组中出现最多的碱基作为频繁子串枚举的种子
//! - **FS 树**：惰性 BFS 枚举以锚点开头、支持度达标的频繁子串
//! - **提示提取**：每个长度保留支持度最高的子串作为候选切割序列
//! - **切割选择**：按切分后片段长度分布的规整度为候选打分并投票定周期
//! - **两遍切分**：先按切割序列划段并均分整数倍段，再对超长段按
//!   编辑距离寻找丢失的边界，迭代至不动点
//!
//! ## 快速示例
//!
//! ```rust
//! use satsplit_rust::split;
//!
//! let array = "ACGT".repeat(10);
//! let res = split::decompose_auto(&array);
//! assert_eq!(res.period, 4);
//! assert_eq!(res.decomposition.concat(), array);
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA / TRF 输入、分解结果输出、单体库持久化
//! - [`index`] — 频繁子串树与提示提取
//! - [`split`] — 切割序列选择、两遍切分与编排
//! - [`util`] — 碱基编码 / 归一化 / 编辑距离等工具函数

pub mod index;
pub mod io;
pub mod split;
pub mod util;
