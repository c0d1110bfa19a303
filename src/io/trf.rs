use anyhow::{anyhow, Result};
use std::io::BufRead;

use super::ArrayRecord;
use crate::util::dna;

/// Tandem Repeats Finder `.dat` 输出的数据行字段数：
/// start end period copies consensus_size pct_match pct_indel score
/// A% C% G% T% entropy consensus repeat_sequence
const DAT_FIELDS: usize = 15;

pub struct TrfReader<R: BufRead> {
    reader: R,
    buf: String,
    seq_name: String,
    done: bool,
}

impl<R: BufRead> TrfReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            seq_name: String::new(),
            done: false,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<ArrayRecord>> {
        if self.done {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                return Ok(None);
            }
            let line = self.buf.trim();

            if let Some(rest) = line.strip_prefix("Sequence:") {
                self.seq_name = rest
                    .trim()
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .to_string();
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < DAT_FIELDS {
                // 表头 / Parameters 行 / 空行
                continue;
            }
            let (Ok(start), Ok(end)) = (fields[0].parse::<u64>(), fields[1].parse::<u64>()) else {
                continue;
            };

            if self.seq_name.is_empty() {
                return Err(anyhow!("TRF data row before any 'Sequence:' line"));
            }

            let raw = fields[DAT_FIELDS - 1].as_bytes();
            let seq = String::from_utf8_lossy(&dna::normalize_seq(raw)).into_owned();
            let header = format!("{}:{}-{}", self.seq_name, start, end);
            return Ok(Some(ArrayRecord { header, seq }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const DAT: &str = "\
Tandem Repeats Finder Program written by:\n\
Benson G.\n\
\n\
Sequence: chr1 test assembly\n\
\n\
Parameters: 2 7 7 80 10 50 500\n\
\n\
101 140 4 10.0 4 100 0 80 25 25 25 25 2.00 ACGT ACGTACGTACGTACGTACGTACGTACGTACGTACGTACGT\n\
200 211 3 4.0 3 100 0 24 33 33 33 0 1.58 acg acgacgacgacg\n\
Sequence: chr2\n\
500 539 4 10.0 4 95 0 72 25 25 25 25 2.00 ACGT ACGTACGTACGTACGTACGTACATACGTACGTACGTACGT\n";

    #[test]
    fn parse_dat_rows() {
        let mut r = TrfReader::new(Cursor::new(DAT.as_bytes()));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.header, "chr1:101-140");
        assert_eq!(r1.seq, "ACGT".repeat(10));

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.header, "chr1:200-211");
        assert_eq!(r2.seq, "ACGACGACGACG");

        let r3 = r.next_record().unwrap().unwrap();
        assert_eq!(r3.header, "chr2:500-539");
        assert!(r3.seq.contains("ACAT"));

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn preamble_only_yields_nothing() {
        let data = "Tandem Repeats Finder\n\nParameters: 2 7 7 80 10 50 500\n";
        let mut r = TrfReader::new(Cursor::new(data.as_bytes()));
        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn data_row_without_sequence_line_errors() {
        let data = "1 40 4 10.0 4 100 0 80 25 25 25 25 2.00 ACGT ACGTACGT\n";
        let mut r = TrfReader::new(Cursor::new(data.as_bytes()));
        assert!(r.next_record().is_err());
    }
}
