//! Substitution scores over residue symbols plus the gap symbol.

mod blosum;
pub mod matrix;
mod parse;

pub use matrix::SubstitutionMatrix;

use crate::error::AlignResult;

/// Symbol emitted for a sequence that does not advance in an alignment column.
pub const GAP: u8 = b'-';

/// Pairwise similarity lookup shared read-only by every alignment worker.
///
/// Implementations must be symmetric and total over their alphabet, including
/// the gap symbol paired with itself.
pub trait ScoreTable: Sync {
    fn score(&self, a: u8, b: u8) -> AlignResult<i32>;

    fn contains(&self, sym: u8) -> bool {
        self.score(sym, sym).is_ok()
    }
}

/// Sum-of-pairs score of one alignment column, averaged over its three pairs.
#[inline]
pub fn triple_score<S: ScoreTable + ?Sized>(table: &S, [a, b, c]: [u8; 3]) -> AlignResult<f64> {
    let sum = table.score(a, b)? + table.score(a, c)? + table.score(b, c)?;
    Ok(f64::from(sum) / 3.0)
}

#[cfg(test)]
mod tests;
