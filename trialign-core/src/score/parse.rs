//! NCBI-style substitution matrix text: `#` comments, a header row of
//! symbols, then one labelled row of integer scores per symbol.

use super::matrix::SubstitutionMatrix;
use crate::error::{AlignError, AlignResult};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::str::FromStr;

fn format_error(msg: impl Into<String>, line: usize) -> AlignError {
    AlignError::ScoreTableFormat {
        msg: msg.into(),
        line,
    }
}

fn parse_symbol(token: &str, line: usize) -> AlignResult<u8> {
    match token.as_bytes() {
        [b] if b.is_ascii_graphic() => Ok(*b),
        _ => Err(format_error(
            format!("expected a single symbol, found '{token}'"),
            line,
        )),
    }
}

impl SubstitutionMatrix {
    pub fn from_reader<R: BufRead>(reader: R) -> AlignResult<Self> {
        let mut header: Option<Vec<u8>> = None;
        let mut rows: Vec<Option<Vec<i32>>> = Vec::new();
        let mut last_line = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            last_line = line_no;
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            let Some(symbols) = header.as_ref() else {
                let symbols = content
                    .split_whitespace()
                    .map(|tok| parse_symbol(tok, line_no))
                    .collect::<AlignResult<Vec<u8>>>()?;
                rows = vec![None; symbols.len()];
                header = Some(symbols);
                continue;
            };

            let mut tokens = content.split_whitespace();
            let label = match tokens.next() {
                Some(tok) => parse_symbol(tok, line_no)?,
                None => continue,
            };
            let row_idx = symbols
                .iter()
                .position(|s| s.eq_ignore_ascii_case(&label))
                .ok_or_else(|| {
                    format_error(
                        format!("row '{}' is not in the header", label as char),
                        line_no,
                    )
                })?;
            if rows[row_idx].is_some() {
                return Err(format_error(
                    format!("duplicate row '{}'", label as char),
                    line_no,
                ));
            }

            let values = tokens
                .map(|tok| {
                    tok.parse::<i32>()
                        .map_err(|_| format_error(format!("invalid score '{tok}'"), line_no))
                })
                .collect::<AlignResult<Vec<i32>>>()?;
            if values.len() != symbols.len() {
                return Err(format_error(
                    format!(
                        "expected {} scores, found {}",
                        symbols.len(),
                        values.len()
                    ),
                    line_no,
                ));
            }
            rows[row_idx] = Some(values);
        }

        let symbols = header.ok_or_else(|| format_error("missing header row", last_line))?;
        let mut scores = Vec::with_capacity(symbols.len() * symbols.len());
        for (sym, row) in symbols.iter().zip(rows) {
            let row = row.ok_or_else(|| {
                format_error(format!("missing row for '{}'", *sym as char), last_line)
            })?;
            scores.extend(row);
        }

        Self::from_scores(&symbols, scores)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AlignResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl FromStr for SubstitutionMatrix {
    type Err = AlignError;

    fn from_str(s: &str) -> AlignResult<Self> {
        Self::from_reader(BufReader::new(Cursor::new(s.as_bytes())))
    }
}
