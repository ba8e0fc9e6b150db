use super::config::AlignerConfig;
use super::grid::{cell_count, Grid};
use super::recurrence::evaluate_cell;
use super::types::{Alignment3, BestCell};
use super::wavefront::Wavefront;
use crate::error::{AlignError, AlignResult};
use crate::score::{ScoreTable, GAP};
use log::{debug, info, trace};

const SEQ_NAMES: [char; 3] = ['A', 'B', 'C'];

/// Three-way local aligner. The score table is borrowed for the whole run
/// and shared read-only by every worker.
pub struct Aligner<'t, S: ScoreTable + ?Sized> {
    table: &'t S,
    config: AlignerConfig,
}

impl<'t, S: ScoreTable + ?Sized> Aligner<'t, S> {
    pub fn new(table: &'t S) -> Self {
        Self::with_config(table, AlignerConfig::default())
    }

    pub fn with_config(table: &'t S, config: AlignerConfig) -> Self {
        Self { table, config }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    pub fn align(&self, a: &[u8], b: &[u8], c: &[u8]) -> AlignResult<Alignment3> {
        let (grid, best) = self.fill(a, b, c)?;
        let alignment = backtrack(&grid, [a, b, c], best);
        info!(
            "best score {:.3} at {:?}, {} columns",
            alignment.score,
            alignment.end,
            alignment.len()
        );
        Ok(alignment)
    }

    /// Runs the wavefront pass and returns the populated grid with its best
    /// cell. Inputs are validated before anything is allocated.
    pub fn fill(&self, a: &[u8], b: &[u8], c: &[u8]) -> AlignResult<(Grid, BestCell)> {
        self.config.validate()?;
        let seqs = [a, b, c];
        for (seq, which) in seqs.iter().zip(SEQ_NAMES) {
            if seq.is_empty() {
                return Err(AlignError::InvalidInput {
                    which,
                    msg: "sequence is empty",
                });
            }
        }
        self.check_symbols(seqs)?;

        let lens = [a.len(), b.len(), c.len()];
        let cells = cell_count(lens);
        let limit = self.config.max_cells.unwrap_or(usize::MAX);
        if cells > limit as u128 {
            return Err(AlignError::GridTooLarge { cells, limit });
        }

        self.in_pool(|| self.fill_grid(seqs, lens, cells))
    }

    fn check_symbols(&self, seqs: [&[u8]; 3]) -> AlignResult<()> {
        let mut seen = [false; 256];
        for &sym in seqs.iter().flat_map(|s| s.iter()) {
            if !seen[sym as usize] {
                seen[sym as usize] = true;
                self.table.score(sym, GAP)?;
            }
        }
        Ok(())
    }

    fn in_pool<T, F>(&self, op: F) -> AlignResult<T>
    where
        T: Send,
        F: FnOnce() -> AlignResult<T> + Send,
    {
        #[cfg(feature = "parallel")]
        {
            if let Some(threads) = self.config.threads {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                return pool.install(op);
            }
        }
        op()
    }

    fn fill_grid(
        &self,
        seqs: [&[u8]; 3],
        lens: [usize; 3],
        cells: u128,
    ) -> AlignResult<(Grid, BestCell)> {
        info!(
            "aligning {}x{}x{} ({} cells) on {} worker(s), batch size {}",
            lens[0],
            lens[1],
            lens[2],
            cells,
            worker_count(),
            self.config.batch_size
        );

        let mut grid = Grid::new(lens);
        let mut best = BestCell::default();
        let table = self.table;

        Wavefront::new(lens).run(
            &mut grid,
            self.config.batch_size,
            |grid, at| evaluate_cell(grid, table, seqs, at),
            |d, group, grid| {
                trace!("group {d}: {} cells", group.len());
                let before = best.score;
                for &at in group {
                    let score = grid.score(at);
                    if score > best.score {
                        best = BestCell { coord: at, score };
                    }
                }
                if best.score > before {
                    debug!("group {d}: best {:.3} at {:?}", best.score, best.coord);
                }
            },
        )?;

        Ok((grid, best))
    }
}

/// Convenience wrapper running one alignment with the default configuration.
pub fn align3<S: ScoreTable + ?Sized>(
    a: &[u8],
    b: &[u8],
    c: &[u8],
    table: &S,
) -> AlignResult<Alignment3> {
    Aligner::new(table).align(a, b, c)
}

/// Follows T from `best` down to the first zero cell.
pub(crate) fn backtrack(grid: &Grid, seqs: [&[u8]; 3], best: BestCell) -> Alignment3 {
    let mut rows: [Vec<u8>; 3] = Default::default();
    let mut at = best.coord;

    // T is set exactly where F > 0, so this stops on the first F = 0 cell.
    while let Some(mv) = grid.trace_move(at) {
        for (row, sym) in rows.iter_mut().zip(mv.column(at, seqs)) {
            row.push(sym);
        }
        at = mv.predecessor(at);
    }
    for row in &mut rows {
        row.reverse();
    }

    Alignment3 {
        rows,
        score: best.score,
        start: at,
        end: best.coord,
    }
}

#[cfg(feature = "parallel")]
fn worker_count() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "parallel"))]
fn worker_count() -> usize {
    1
}
