//! Win and tie detection.
//!
//! The outcome is always recomputed from the board; nothing about it is
//! stored between turns.

use tracing::trace;

use crate::board::{Board, Cell, Coordinate, Player};

/// Result of inspecting a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Tie,
}

impl GameOutcome {
    pub fn is_finished(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Canonical result code: 0 for a tie, otherwise the winner's number.
    /// `None` while the game is still running.
    pub fn code(self) -> Option<u8> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Tie => Some(0),
            GameOutcome::Win(player) => Some(player.number()),
        }
    }
}

/// All lines of length `size`: rows, then columns, then the two diagonals.
pub fn lines(size: usize) -> impl Iterator<Item = Vec<Coordinate>> {
    let rows = (0..size).map(move |r| {
        (0..size)
            .map(|c| Coordinate::new(r, c))
            .collect::<Vec<_>>()
    });
    let cols = (0..size).map(move |c| {
        (0..size)
            .map(|r| Coordinate::new(r, c))
            .collect::<Vec<_>>()
    });
    let down = (0..size).map(|i| Coordinate::new(i, i)).collect::<Vec<_>>();
    let up = (0..size)
        .map(|i| Coordinate::new(size - 1 - i, i))
        .collect::<Vec<_>>();
    rows.chain(cols).chain([down, up])
}

/// The first complete line and its owner, if any.
///
/// A line of empty cells never counts.
pub fn winning_line(board: &Board) -> Option<(Player, Vec<Coordinate>)> {
    lines(board.size()).find_map(|line| {
        let Cell::Occupied(player) = board.cell(line[0]) else {
            return None;
        };
        line.iter()
            .all(|&at| board.cell(at) == Cell::Occupied(player))
            .then_some((player, line))
    })
}

/// Report whether the game is won, tied, or still going.
pub fn evaluate(board: &Board) -> GameOutcome {
    let outcome = if let Some((player, _)) = winning_line(board) {
        GameOutcome::Win(player)
    } else if board.is_full() {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    };
    trace!(?outcome, "evaluated board");
    outcome
}
