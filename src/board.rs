//! Square game board with per-cell occupancy.
//!
//! The board stores cells in row-major order and knows nothing about turns or
//! legality; [`moves`](crate::moves) checks occupancy before writing.

use std::fmt;

use derive_more::{Display, Error};

use crate::constants::DEFAULT_SIZE;
use crate::render::{Markers, render_board};

/// One of the two players. Player 1 always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    #[display("Player 1")]
    One,
    #[display("Player 2")]
    Two,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2, as shown in prompts and score lines.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// State of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A zero-based (row, column) pair.
///
/// Displays 1-based, the way players type coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
#[display("{},{}", row + 1, col + 1)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Failure from a board accessor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("cell ({row}, {col}) is outside the {size}x{size} board")]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
    pub size: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// Panics if `size` is zero; configuration rejects that before a board
    /// is ever built.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, row: usize, col: usize) -> Result<usize, OutOfBounds> {
        if row >= self.size || col >= self.size {
            return Err(OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        let i = self.idx(row, col)?;
        Ok(self.cells[i])
    }

    /// Overwrite a cell. Occupancy is not checked here.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), OutOfBounds> {
        let i = self.idx(row, col)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Cell lookup for coordinates the crate generated itself.
    ///
    /// An out-of-range coordinate here is a logic error, not bad input, so it
    /// panics with the offending cell.
    pub(crate) fn cell(&self, at: Coordinate) -> Cell {
        match self.get(at.row, at.col) {
            Ok(cell) => cell,
            Err(err) => panic!("internal board access failed: {err}"),
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of empty cells left.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Every cell with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coordinate::new(i / size, i % size), cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self, &Markers::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.size(), 3);
        assert_eq!(board.empty_cells(), 9);
        assert!(board.cells().all(|(_, c)| c == Cell::Empty));
    }

    #[test]
    fn test_set_then_get_only_touches_one_cell() {
        let mut board = Board::new(3);
        board.set(1, 2, Cell::Occupied(Player::Two)).unwrap();

        for (at, cell) in board.cells() {
            if at == Coordinate::new(1, 2) {
                assert_eq!(cell, Cell::Occupied(Player::Two));
            } else {
                assert_eq!(cell, Cell::Empty, "cell {at} changed");
            }
        }
        assert_eq!(board.get(1, 2), Ok(Cell::Occupied(Player::Two)));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(3);
        assert_eq!(
            board.get(3, 0),
            Err(OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert!(board.get(0, 3).is_err());
        assert!(board.set(5, 5, Cell::Occupied(Player::One)).is_err());
        assert_eq!(board.empty_cells(), 9);
    }

    #[test]
    fn test_is_full_after_covering_every_cell() {
        let mut board = Board::new(4);
        let mut player = Player::One;
        for row in 0..4 {
            for col in 0..4 {
                assert!(!board.is_full());
                board.set(row, col, Cell::Occupied(player)).unwrap();
                player = player.opponent();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells(), 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut board = Board::new(3);
        board.set(0, 0, Cell::Occupied(Player::One)).unwrap();
        board.set(2, 1, Cell::Occupied(Player::Two)).unwrap();

        board.reset();
        assert_eq!(board.empty_cells(), 9);
        board.reset();
        assert_eq!(board.empty_cells(), 9);
    }

    #[test]
    fn test_cells_row_major_order() {
        let board = Board::new(2);
        let coords: Vec<_> = board.cells().map(|(at, _)| at).collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_coordinate_displays_one_based() {
        assert_eq!(Coordinate::new(0, 2).to_string(), "1,3");
    }

    #[test]
    fn test_player_opponent_and_number() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.to_string(), "Player 2");
    }
}
