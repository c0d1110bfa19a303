use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::split::DecomposeResult;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DbMeta {
    pub input_file: Option<String>,
    pub build_args: Option<String>,
    pub build_timestamp: Option<String>,
}

/// 单个数组的分解摘要：单体表按多重度降序（同频按字典序）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbRecord {
    pub header: String,
    pub period: u32,
    pub score: f64,
    pub cut_seq: String,
    pub n_fragments: u32,
    pub monomers: Vec<(String, u32)>,
}

impl DbRecord {
    pub fn from_result(header: &str, result: &DecomposeResult) -> Self {
        let mut monomers: Vec<(String, u32)> = result
            .histogram
            .iter()
            .map(|(seq, &count)| (seq.clone(), count))
            .collect();
        monomers.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            header: header.to_string(),
            period: result.period as u32,
            score: result.score,
            cut_seq: result.cut_seq.clone(),
            n_fragments: result.decomposition.len() as u32,
            monomers,
        }
    }
}

/// 跨数组的单体库，可落盘复用（bincode 序列化）。
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MonomerDb {
    pub meta: DbMeta,
    pub records: Vec<DbRecord>,
}

impl MonomerDb {
    pub fn push(&mut self, record: DbRecord) {
        self.records.push(record);
    }

    pub fn set_meta(&mut self, meta: DbMeta) {
        self.meta = meta;
    }

    /// 全库汇总后的前 n 个单体（多重度降序，同频按字典序）。
    pub fn top_monomers(&self, n: usize) -> Vec<(String, u32)> {
        let mut total: std::collections::HashMap<&str, u32> = std::collections::HashMap::new();
        for rec in &self.records {
            for (seq, count) in &rec.monomers {
                *total.entry(seq.as_str()).or_insert(0) += count;
            }
        }
        let mut out: Vec<(String, u32)> = total
            .into_iter()
            .map(|(seq, count)| (seq.to_string(), count))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        out.truncate(n);
        out
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let mut f = std::fs::File::create(path)?;
        bincode::serialize_into(&mut f, self)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        let db: Self = bincode::deserialize_from(f)?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::decompose_auto;

    #[test]
    fn record_from_result_sorts_monomers() {
        let array = format!("{}ACAT{}", "ACGT".repeat(5), "ACGT".repeat(4));
        let res = decompose_auto(&array);
        let rec = DbRecord::from_result("arr1", &res);
        assert_eq!(rec.period, 4);
        assert_eq!(rec.n_fragments, 10);
        assert_eq!(rec.monomers[0], ("ACGT".to_string(), 9));
        assert_eq!(rec.monomers[1], ("ACAT".to_string(), 1));
    }

    #[test]
    fn top_monomers_aggregates_across_records() {
        let mut db = MonomerDb::default();
        let r1 = decompose_auto(&"ACGT".repeat(10));
        let r2 = decompose_auto(&"ACGT".repeat(5));
        db.push(DbRecord::from_result("a", &r1));
        db.push(DbRecord::from_result("b", &r2));
        let top = db.top_monomers(5);
        assert_eq!(top[0], ("ACGT".to_string(), 15));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut db = MonomerDb::default();
        db.push(DbRecord::from_result("a", &decompose_auto(&"ACGT".repeat(10))));
        db.set_meta(DbMeta {
            input_file: Some("arrays.fa".to_string()),
            build_args: None,
            build_timestamp: Some("2025-01-01T00:00:00Z".to_string()),
        });

        let dir = std::env::temp_dir();
        let path = dir.join("satsplit_db_test.sdb");
        let path = path.to_string_lossy().to_string();
        db.save_to_file(&path).unwrap();
        let loaded = MonomerDb::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].header, "a");
        assert_eq!(loaded.meta.input_file.as_deref(), Some("arrays.fa"));
    }
}
