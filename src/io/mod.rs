pub mod db;
pub mod emit;
pub mod fasta;
pub mod trf;

/// 输入适配层的统一产出：一个待分解的数组及其头部。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayRecord {
    pub header: String,
    pub seq: String,
}
