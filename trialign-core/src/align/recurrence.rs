use super::grid::{Cell, Grid};
use super::types::{Coord, Move};
use crate::error::AlignResult;
use crate::score::{triple_score, ScoreTable};

/// Scores interior cell `at` from its seven predecessors.
///
/// F = max(0, F[pred] + column score). Candidates are tried in `Move::ALL`
/// order with a strict comparison, so the first move reaching the maximum
/// is kept and the zero floor wins every tie at 0.
#[inline]
pub(crate) fn evaluate_cell<S: ScoreTable + ?Sized>(
    grid: &Grid,
    table: &S,
    seqs: [&[u8]; 3],
    at: Coord,
) -> AlignResult<Cell> {
    let mut best = Cell::FLOOR;
    for mv in Move::ALL {
        let candidate = grid.score(mv.predecessor(at)) + triple_score(table, mv.column(at, seqs))?;
        if candidate > best.score {
            best = Cell {
                score: candidate,
                mv: Some(mv),
            };
        }
    }
    Ok(best)
}
