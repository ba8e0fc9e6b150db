//! Three-dimensional Smith-Waterman over diagonal wavefronts.

pub mod aligner;
pub mod config;
pub mod grid;
mod recurrence;
pub mod types;
pub mod wavefront;

pub use crate::score::GAP;
pub use aligner::{align3, Aligner};
pub use config::AlignerConfig;
pub use grid::Grid;
pub use types::{Alignment3, BestCell, Coord, Move};
pub use wavefront::Wavefront;
