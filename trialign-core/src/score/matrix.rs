use super::blosum::{BLOSUM62, BLOSUM62_ALPHABET};
use super::{ScoreTable, GAP};
use crate::error::{AlignError, AlignResult};

const ABSENT: u8 = 255;
const STOP: u8 = b'*';

/// Dense symmetric substitution matrix with a case-insensitive symbol index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstitutionMatrix {
    alphabet: Vec<u8>,
    index: [u8; 256],
    scores: Vec<i32>,
}

fn build_map(alphabet: &[u8]) -> [u8; 256] {
    let mut map = [ABSENT; 256];
    for (i, &b) in alphabet.iter().enumerate() {
        map[b.to_ascii_uppercase() as usize] = i as u8;
        map[b.to_ascii_lowercase() as usize] = i as u8;
    }
    map
}

impl SubstitutionMatrix {
    /// Builds a matrix from row-major `scores` over `alphabet`.
    ///
    /// If the alphabet lacks the gap symbol, a gap row is derived from the
    /// `*` row, mirroring how NCBI tables score stop codons.
    pub fn from_scores(alphabet: &[u8], scores: Vec<i32>) -> AlignResult<Self> {
        let n = alphabet.len();
        if n == 0 || n >= ABSENT as usize {
            return Err(AlignError::ScoreTableFormat {
                msg: format!("alphabet size {n} out of range (expected 1..255)"),
                line: 0,
            });
        }
        if scores.len() != n * n {
            return Err(AlignError::ScoreTableFormat {
                msg: format!("expected {} scores, found {}", n * n, scores.len()),
                line: 0,
            });
        }

        let index = build_map(alphabet);
        for (i, &b) in alphabet.iter().enumerate() {
            if index[b as usize] as usize != i {
                return Err(AlignError::ScoreTableFormat {
                    msg: format!("duplicate symbol '{}'", b as char),
                    line: 0,
                });
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if scores[i * n + j] != scores[j * n + i] {
                    return Err(AlignError::AsymmetricScoreTable {
                        a: alphabet[i],
                        b: alphabet[j],
                    });
                }
            }
        }

        let matrix = Self {
            alphabet: alphabet.to_vec(),
            index,
            scores,
        };
        if matrix.contains(GAP) {
            Ok(matrix)
        } else {
            matrix.with_gap_like_stop()
        }
    }

    /// Uniform scheme: `match_score` on identical residues, `mismatch_score`
    /// otherwise, `gap_score` for a residue against a gap and 0 for two gaps.
    pub fn simple(alphabet: &[u8], match_score: i32, mismatch_score: i32, gap_score: i32) -> Self {
        let mut symbols: Vec<u8> = Vec::with_capacity(alphabet.len() + 1);
        for &b in alphabet {
            let b = b.to_ascii_uppercase();
            if b != GAP && !symbols.contains(&b) {
                symbols.push(b);
            }
        }
        symbols.push(GAP);

        let n = symbols.len();
        let mut scores = vec![0i32; n * n];
        for i in 0..n {
            for j in 0..n {
                let (a, b) = (symbols[i], symbols[j]);
                scores[i * n + j] = match (a == GAP, b == GAP) {
                    (true, true) => 0,
                    (true, false) | (false, true) => gap_score,
                    (false, false) if a == b => match_score,
                    (false, false) => mismatch_score,
                };
            }
        }

        Self {
            index: build_map(&symbols),
            alphabet: symbols,
            scores,
        }
    }

    /// BLOSUM62 over the 20 amino acids, the ambiguity codes B/Z/X and `*`.
    /// The gap symbol scores like `*`.
    pub fn blosum62() -> Self {
        let n = BLOSUM62_ALPHABET.len() + 1;
        let stop = BLOSUM62_ALPHABET.len() - 1;
        let mut alphabet = BLOSUM62_ALPHABET.to_vec();
        alphabet.push(GAP);

        let mut scores = vec![0i32; n * n];
        for i in 0..n {
            for j in 0..n {
                let ri = i.min(stop);
                let rj = j.min(stop);
                scores[i * n + j] = i32::from(BLOSUM62[ri][rj]);
            }
        }

        Self {
            index: build_map(&alphabet),
            alphabet,
            scores,
        }
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    #[inline]
    pub fn get(&self, a: u8, b: u8) -> Option<i32> {
        let ia = self.index[a as usize];
        let ib = self.index[b as usize];
        if ia == ABSENT || ib == ABSENT {
            return None;
        }
        Some(self.scores[ia as usize * self.alphabet.len() + ib as usize])
    }

    fn with_gap_like_stop(self) -> AlignResult<Self> {
        let stop = match self.index[STOP as usize] {
            ABSENT => {
                return Err(AlignError::ScoreTableFormat {
                    msg: "table has neither a '-' nor a '*' column to score gaps".to_string(),
                    line: 0,
                })
            }
            idx => idx as usize,
        };

        let old_n = self.alphabet.len();
        let n = old_n + 1;
        let mut alphabet = self.alphabet;
        alphabet.push(GAP);

        let mut scores = vec![0i32; n * n];
        for i in 0..n {
            for j in 0..n {
                let ri = if i == old_n { stop } else { i };
                let rj = if j == old_n { stop } else { j };
                scores[i * n + j] = self.scores[ri * old_n + rj];
            }
        }

        Ok(Self {
            index: build_map(&alphabet),
            alphabet,
            scores,
        })
    }
}

impl ScoreTable for SubstitutionMatrix {
    #[inline]
    fn score(&self, a: u8, b: u8) -> AlignResult<i32> {
        self.get(a, b).ok_or(AlignError::UnknownSymbol { a, b })
    }

    fn contains(&self, sym: u8) -> bool {
        self.index[sym as usize] != ABSENT
    }
}
