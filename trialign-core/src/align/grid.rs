//! Flat score (F) and trace (T) arrays over `[0..=lenA]×[0..=lenB]×[0..=lenC]`.
//!
//! Every cell starts at F = 0 with no trace, which is already the final state
//! of the three boundary planes. Interior cells are written exactly once, by
//! the wavefront pass, after all of their predecessors.

use super::types::{Coord, Move};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Cell {
    pub score: f64,
    pub mv: Option<Move>,
}

impl Cell {
    pub const FLOOR: Cell = Cell {
        score: 0.0,
        mv: None,
    };
}

/// Number of cells for the given sequence lengths, boundary planes included.
pub(crate) fn cell_count(lens: [usize; 3]) -> u128 {
    lens.iter().map(|&n| n as u128 + 1).product()
}

#[derive(Clone, Debug)]
pub struct Grid {
    lens: [usize; 3],
    scores: Vec<f64>,
    trace: Vec<Option<Move>>,
}

impl Grid {
    pub(crate) fn new(lens: [usize; 3]) -> Self {
        let cells: usize = lens.iter().map(|&n| n + 1).product();
        Self {
            lens,
            scores: vec![0.0; cells],
            trace: vec![None; cells],
        }
    }

    /// Sequence lengths (A, B, C).
    pub fn lens(&self) -> [usize; 3] {
        self.lens
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.i <= self.lens[0] && at.j <= self.lens[1] && at.k <= self.lens[2]
    }

    #[inline]
    fn index(&self, at: Coord) -> usize {
        debug_assert!(self.contains(at), "{at:?} outside grid {:?}", self.lens);
        (at.i * (self.lens[1] + 1) + at.j) * (self.lens[2] + 1) + at.k
    }

    /// F: best score of a local alignment ending exactly at `at`.
    #[inline]
    pub fn score(&self, at: Coord) -> f64 {
        self.scores[self.index(at)]
    }

    /// Move that produced F at `at`; `None` wherever F is the zero floor.
    #[inline]
    pub fn trace_move(&self, at: Coord) -> Option<Move> {
        self.trace[self.index(at)]
    }

    /// T: predecessor coordinate of `at`.
    pub fn trace(&self, at: Coord) -> Option<Coord> {
        self.trace_move(at).map(|mv| mv.predecessor(at))
    }

    pub(crate) fn set(&mut self, at: Coord, cell: Cell) {
        let idx = self.index(at);
        debug_assert!(
            self.trace[idx].is_none() && self.scores[idx] == 0.0,
            "{at:?} written twice"
        );
        self.scores[idx] = cell.score;
        self.trace[idx] = cell.mv;
    }

    /// Renders the `i`-th plane of F, one `j` row per line, right-aligned.
    pub fn render_plane(&self, i: usize) -> String {
        let [_, len_b, len_c] = self.lens;
        let cells: Vec<Vec<String>> = (0..=len_b)
            .map(|j| {
                (0..=len_c)
                    .map(|k| format!("{:.2}", self.score(Coord::new(i, j, k))))
                    .collect()
            })
            .collect();

        let mut widths = vec![0usize; len_c + 1];
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        cells
            .iter()
            .map(|row| {
                let padded: Vec<String> = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &w)| format!("{cell:>w$}"))
                    .collect();
                format!("[{}]", padded.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
