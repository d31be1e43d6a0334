//! Constants for board dimensions, player markers, and text layout.
//!
//! The board size is a runtime value carried by each [`Board`](crate::board::Board);
//! the values here are only the defaults and limits used when building one.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). Classic tic-tac-toe is 3x3.
pub const DEFAULT_SIZE: usize = 3;

/// Largest board size accepted from configuration.
pub const MAX_SIZE: usize = 9;

/// Offset between user-facing (1-based) and internal (0-based) coordinates.
pub const COORDINATE_OFFSET: i64 = 1;

// =============================================================================
// Players
// =============================================================================

/// Default marker for player 1.
pub const PLAYER_ONE_MARKER: char = 'X';

/// Default marker for player 2.
pub const PLAYER_TWO_MARKER: char = 'O';

/// Character drawn for an empty cell.
pub const BLANK_MARKER: char = ' ';

// =============================================================================
// Rendering
// =============================================================================

/// Text lines used to draw one row of cells. The marker sits on the middle one.
pub const CELL_LINES: usize = 3;

/// Horizontal rule drawn under each cell between rows.
pub const CELL_RULE: &str = "---";
