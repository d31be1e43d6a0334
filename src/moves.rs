//! Move parsing and validation.
//!
//! Players type moves as `x,y` with 1-based numbers, `x` being the row. A move
//! is only written to the board once it parses, lands on the board, and
//! targets an empty cell.

use std::num::{IntErrorKind, ParseIntError};

use derive_more::{Display, Error};
use tracing::debug;

use crate::board::{Board, Cell, Coordinate, OutOfBounds, Player};
use crate::constants::COORDINATE_OFFSET;

/// Why a move was rejected. Always recoverable: the player is asked again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Error)]
pub enum MoveError {
    #[display("No input detected")]
    NoInput,
    #[display("Did not detect x or y")]
    MalformedInput,
    #[display("Cell out of bounds")]
    OutOfBounds,
    #[display("Cell already taken")]
    CellOccupied,
}

impl MoveError {
    /// Whether the player should be reminded of the `(x,y)` input form.
    pub fn is_format_error(self) -> bool {
        matches!(self, MoveError::NoInput | MoveError::MalformedInput)
    }
}

impl From<OutOfBounds> for MoveError {
    fn from(_: OutOfBounds) -> Self {
        MoveError::OutOfBounds
    }
}

/// Translate a 1-based (row, column) pair into a board coordinate.
pub fn from_one_based(x: i64, y: i64, size: usize) -> Result<Coordinate, MoveError> {
    let axis = |v: i64| {
        v.checked_sub(COORDINATE_OFFSET)
            .and_then(|v| usize::try_from(v).ok())
            .filter(|&v| v < size)
            .ok_or(MoveError::OutOfBounds)
    };
    Ok(Coordinate::new(axis(x)?, axis(y)?))
}

/// A number too large for `i64` is still a number, just not on the board.
fn number_error(e: ParseIntError) -> MoveError {
    match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => MoveError::OutOfBounds,
        _ => MoveError::MalformedInput,
    }
}

/// Parse a line of player input such as `"2,3"` or `" 2 , 3 "`.
pub fn parse_coordinate(input: &str, size: usize) -> Result<Coordinate, MoveError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(MoveError::NoInput);
    }
    let (x, y) = input.split_once(',').ok_or(MoveError::MalformedInput)?;
    let x: i64 = x.trim().parse().map_err(number_error)?;
    let y: i64 = y.trim().parse().map_err(number_error)?;
    from_one_based(x, y, size)
}

/// Place `player` at `at` if the cell exists and is empty.
///
/// A rejected move leaves the board untouched.
pub fn validate_and_apply(
    board: &mut Board,
    at: Coordinate,
    player: Player,
) -> Result<(), MoveError> {
    match board.get(at.row, at.col)? {
        Cell::Occupied(owner) => {
            debug!(%at, %player, %owner, "cell already taken");
            Err(MoveError::CellOccupied)
        }
        Cell::Empty => {
            board.set(at.row, at.col, Cell::Occupied(player))?;
            debug!(%at, %player, "move applied");
            Ok(())
        }
    }
}
