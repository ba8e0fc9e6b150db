use crate::error::{AlignError, AlignResult};
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: Box<str>,
    pub seq: Vec<u8>,
    /// Line number of the header, 1-based.
    pub line: usize,
}

impl FastaRecord {
    /// First whitespace-delimited word of the header.
    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }
}

pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    pending_header: Option<(String, usize)>,
    buf_line: String,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            buf_line: String::new(),
        }
    }

    fn next_header(&mut self) -> Option<AlignResult<(String, usize)>> {
        if let Some(pending) = self.pending_header.take() {
            return Some(Ok(pending));
        }

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    if self.buf_line.starts_with('>') {
                        return Some(Ok((self.buf_line.clone(), self.line_no)));
                    }
                    if self.buf_line.trim().is_empty() {
                        continue;
                    }
                    return Some(Err(AlignError::Parse {
                        msg: "expected header line starting with '>'",
                        line: self.line_no,
                    }));
                }
                Err(err) => return Some(Err(AlignError::Io(err))),
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = AlignResult<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let (header_line, line) = match self.next_header()? {
            Ok(header) => header,
            Err(err) => return Some(Err(err)),
        };
        let header: Box<str> = header_line[1..].trim().into();
        if header.is_empty() {
            return Some(Err(AlignError::Parse {
                msg: "empty header",
                line,
            }));
        }

        let mut seq = Vec::new();
        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => break,
                Ok(_) => {
                    self.line_no += 1;
                    if self.buf_line.starts_with('>') {
                        self.pending_header = Some((self.buf_line.clone(), self.line_no));
                        break;
                    }
                    seq.extend(
                        self.buf_line
                            .bytes()
                            .filter(|b| !b.is_ascii_whitespace()),
                    );
                }
                Err(err) => return Some(Err(AlignError::Io(err))),
            }
        }

        Some(Ok(FastaRecord { header, seq, line }))
    }
}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> FastaRecords<R> {
    FastaRecords::new(reader)
}

/// The three input sequences of one alignment run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceTriple {
    pub records: [FastaRecord; 3],
}

impl SequenceTriple {
    pub fn sequences(&self) -> [&[u8]; 3] {
        let [a, b, c] = &self.records;
        [a.seq(), b.seq(), c.seq()]
    }
}

/// Reads the first three records; each must carry at least one body line
/// with sequence content. Further records are ignored.
pub fn read_sequence_triple_from_reader<R: BufRead>(reader: R) -> AlignResult<SequenceTriple> {
    let mut records = fasta_records_from_reader(reader);
    let mut take = || -> AlignResult<FastaRecord> {
        let record = records.next().transpose()?.ok_or(AlignError::Parse {
            msg: "expected three sequence records",
            line: 0,
        })?;
        if record.seq.is_empty() {
            return Err(AlignError::Parse {
                msg: "record has no sequence lines",
                line: record.line,
            });
        }
        Ok(record)
    };
    let triple = [take()?, take()?, take()?];

    let mut extra = 0usize;
    for record in records {
        record?;
        extra += 1;
    }
    if extra > 0 {
        warn!("ignoring {extra} sequence record(s) after the third");
    }

    Ok(SequenceTriple { records: triple })
}

pub fn read_sequence_triple_from_path(path: impl AsRef<Path>) -> AlignResult<SequenceTriple> {
    let file = File::open(path)?;
    read_sequence_triple_from_reader(BufReader::new(file))
}

pub fn read_sequence_triple_from_bytes(data: &[u8]) -> AlignResult<SequenceTriple> {
    read_sequence_triple_from_reader(BufReader::new(Cursor::new(data)))
}
