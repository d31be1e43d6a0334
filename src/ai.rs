//! Random computer opponent.
//!
//! The opponent has no strategy: it samples cells uniformly and keeps the
//! first empty one it hits.

use tracing::debug;

use crate::board::{Board, Coordinate};

/// Source of uniformly distributed cell indices.
pub trait CellSampler {
    /// A value in `[0, bound)`.
    fn sample_index(&mut self, bound: usize) -> usize;
}

impl CellSampler for fastrand::Rng {
    fn sample_index(&mut self, bound: usize) -> usize {
        self.usize(..bound)
    }
}

/// Pick a random empty cell by rejection sampling.
///
/// Returns `None` on a full board instead of sampling forever.
pub fn select_move<R: CellSampler + ?Sized>(board: &Board, rng: &mut R) -> Option<Coordinate> {
    if board.is_full() {
        return None;
    }
    let size = board.size();
    let mut draws = 0u32;
    loop {
        draws += 1;
        let index = rng.sample_index(size * size);
        let at = Coordinate::new(index / size, index % size);
        if board.cell(at).is_empty() {
            debug!(%at, draws, "computer selected cell");
            return Some(at);
        }
    }
}
