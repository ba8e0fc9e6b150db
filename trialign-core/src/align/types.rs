use crate::score::GAP;
use memchr::memchr_iter;

/// Grid coordinate; `i`, `j`, `k` index sequences A, B and C (1-based,
/// 0 is the boundary plane).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { i: 0, j: 0, k: 0 };

    pub const fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// Wavefront index `i + j + k`.
    pub fn diagonal(&self) -> usize {
        self.i + self.j + self.k
    }

    pub fn on_boundary(&self) -> bool {
        self.i == 0 || self.j == 0 || self.k == 0
    }
}

/// One of the seven ways to enter a cell. Each variant names the sequences
/// that advance by one position; the others contribute a gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    AdvanceAll,
    AdvanceBC,
    AdvanceAC,
    AdvanceC,
    AdvanceAB,
    AdvanceB,
    AdvanceA,
}

impl Move {
    /// Evaluation order. On equal scores the earlier move is kept.
    pub const ALL: [Move; 7] = [
        Move::AdvanceAll,
        Move::AdvanceBC,
        Move::AdvanceAC,
        Move::AdvanceC,
        Move::AdvanceAB,
        Move::AdvanceB,
        Move::AdvanceA,
    ];

    /// Index deltas for (A, B, C): 1 advances, 0 gaps.
    pub const fn deltas(self) -> [usize; 3] {
        match self {
            Move::AdvanceAll => [1, 1, 1],
            Move::AdvanceBC => [0, 1, 1],
            Move::AdvanceAC => [1, 0, 1],
            Move::AdvanceC => [0, 0, 1],
            Move::AdvanceAB => [1, 1, 0],
            Move::AdvanceB => [0, 1, 0],
            Move::AdvanceA => [1, 0, 0],
        }
    }

    /// Cell this move comes from. `at` must be an interior coordinate.
    #[inline]
    pub fn predecessor(self, at: Coord) -> Coord {
        let [da, db, dc] = self.deltas();
        Coord::new(at.i - da, at.j - db, at.k - dc)
    }

    /// Alignment column emitted when entering `at` by this move.
    #[inline]
    pub fn column(self, at: Coord, seqs: [&[u8]; 3]) -> [u8; 3] {
        let [da, db, dc] = self.deltas();
        let pick = |seq: &[u8], idx: usize, delta: usize| {
            if delta == 1 {
                seq[idx - 1]
            } else {
                GAP
            }
        };
        [
            pick(seqs[0], at.i, da),
            pick(seqs[1], at.j, db),
            pick(seqs[2], at.k, dc),
        ]
    }
}

/// Running maximum of the score grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BestCell {
    pub coord: Coord,
    pub score: f64,
}

/// Three gapped rows of equal length plus where the local alignment sits in
/// the grid. `start` is the zero-score cell the backtrace stopped at, so the
/// aligned residues of A are `a[start.i..end.i]` (likewise for B and C).
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment3 {
    pub rows: [Vec<u8>; 3],
    pub score: f64,
    pub start: Coord,
    pub end: Coord,
}

impl Alignment3 {
    pub fn len(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows[0].is_empty()
    }

    pub fn row(&self, idx: usize) -> &[u8] {
        &self.rows[idx]
    }

    pub fn row_str(&self, idx: usize) -> String {
        String::from_utf8_lossy(&self.rows[idx]).into_owned()
    }

    pub fn gap_count(&self, idx: usize) -> usize {
        memchr_iter(GAP, &self.rows[idx]).count()
    }

    pub fn columns(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        let [a, b, c] = &self.rows;
        a.iter()
            .zip(b.iter())
            .zip(c.iter())
            .map(|((&x, &y), &z)| [x, y, z])
    }
}
