//! Diagonal-group scheduling of the interior cells.
//!
//! Every move lowers `i + j + k` by at least one, so the cells of one
//! diagonal group never read each other. Groups run in increasing order; the
//! cells of a group are evaluated in parallel batches and committed to the
//! grid before the next group starts.

use super::grid::{Cell, Grid};
use super::types::Coord;
use crate::error::AlignResult;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wavefront {
    lens: [usize; 3],
}

impl Wavefront {
    pub fn new(lens: [usize; 3]) -> Self {
        Self { lens }
    }

    /// Diagonal indices that hold interior cells, in processing order.
    pub fn diagonals(&self) -> Range<usize> {
        let [a, b, c] = self.lens;
        if a == 0 || b == 0 || c == 0 {
            return 0..0;
        }
        3..a + b + c + 1
    }

    /// Appends the interior cells with `i + j + k == d` to `out`, ordered by
    /// `(i, j)` ascending.
    pub fn fill_group(&self, d: usize, out: &mut Vec<Coord>) {
        let [len_a, len_b, len_c] = self.lens;
        if d < 3 {
            return;
        }
        let i_lo = d.saturating_sub(len_b + len_c).max(1);
        let i_hi = len_a.min(d - 2);
        for i in i_lo..=i_hi {
            let rem = d - i;
            let j_lo = rem.saturating_sub(len_c).max(1);
            let j_hi = len_b.min(rem - 1);
            for j in j_lo..=j_hi {
                out.push(Coord::new(i, j, rem - j));
            }
        }
    }

    pub fn group(&self, d: usize) -> Vec<Coord> {
        let mut out = Vec::new();
        self.fill_group(d, &mut out);
        out
    }

    /// Evaluates every interior cell of `grid` group by group.
    ///
    /// `eval` must only read cells of earlier groups. After each group is
    /// committed, `on_group` sees its diagonal index, its cells in order and
    /// the updated grid. The first failing cell aborts the pass.
    pub(crate) fn run<E, G>(
        &self,
        grid: &mut Grid,
        batch_size: usize,
        eval: E,
        mut on_group: G,
    ) -> AlignResult<()>
    where
        E: Fn(&Grid, Coord) -> AlignResult<Cell> + Sync,
        G: FnMut(usize, &[Coord], &Grid),
    {
        let mut coords = Vec::new();
        for d in self.diagonals() {
            coords.clear();
            self.fill_group(d, &mut coords);

            let batches: AlignResult<Vec<Vec<Cell>>> = {
                let grid: &Grid = grid;
                let eval = &eval;
                par_try_map_chunks!(coords, batch_size, |batch: &[Coord]| {
                    batch
                        .iter()
                        .map(|&at| eval(grid, at))
                        .collect::<AlignResult<Vec<Cell>>>()
                })
            };

            for (&at, cell) in coords.iter().zip(batches?.into_iter().flatten()) {
                grid.set(at, cell);
            }
            on_group(d, &coords, grid);
        }
        Ok(())
    }
}
