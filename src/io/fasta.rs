use anyhow::Result;
use std::io::BufRead;

use super::ArrayRecord;
use crate::util::dna;

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<ArrayRecord>> {
        if self.done {
            return Ok(None);
        }

        // Find header line
        let header = if let Some(h) = self.peek_header.take() {
            h
        } else {
            loop {
                self.buf.clear();
                let n = self.reader.read_line(&mut self.buf)?;
                if n == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.starts_with('>') {
                    break self.buf[1..].trim().to_string();
                }
            }
        };

        // Read sequence lines until the next header
        let mut raw: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                break;
            }
            if self.buf.starts_with('>') {
                self.peek_header = Some(self.buf[1..].trim().to_string());
                break;
            }
            for &b in self.buf.as_bytes() {
                match b {
                    b'\n' | b'\r' | b' ' | b'\t' => {}
                    _ => raw.push(b),
                }
            }
        }

        let seq = String::from_utf8_lossy(&dna::normalize_seq(&raw)).into_owned();
        Ok(Some(ArrayRecord { header, seq }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_simple_fasta() {
        let data = b">arr1 chrX satellite\nACgTNN\n>arr2\nAAA\n";
        let cursor = Cursor::new(&data[..]);
        let mut r = FastaReader::new(cursor);

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.header, "arr1 chrX satellite");
        assert_eq!(r1.seq, "ACGTNN");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.header, "arr2");
        assert_eq!(r2.seq, "AAA");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_crlf_and_whitespace() {
        let data = b">arr1 desc\r\nAC g t n\r\n acgt\r\n>arr2 \r\n N N N \r\n";
        let cursor = Cursor::new(&data[..]);
        let mut r = FastaReader::new(cursor);

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.header, "arr1 desc");
        assert_eq!(r1.seq, "ACGTNACGT");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.header, "arr2");
        assert_eq!(r2.seq, "NNN");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_leading_empty_lines() {
        let data = b"\n\n>arr1\nACGT\n";
        let cursor = Cursor::new(&data[..]);
        let mut r = FastaReader::new(cursor);

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.header, "arr1");
        assert_eq!(r1.seq, "ACGT");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn unknown_symbols_become_n() {
        let data = b">arr1\nACXTU\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));
        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.seq, "ACNTT");
    }
}
