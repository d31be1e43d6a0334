//! Text rendering of the board.
//!
//! Each row is drawn as [`CELL_LINES`] text lines with the marker on the middle
//! one, columns are split by `|` and rows by a dashed rule:
//!
//! ```text
//!    |   |
//!  X | O |
//!    |   |
//! -----------
//! ```

use crate::board::{Board, Cell, Player};
use crate::config::ConfigError;
use crate::constants::{BLANK_MARKER, CELL_LINES, CELL_RULE, PLAYER_ONE_MARKER, PLAYER_TWO_MARKER};

/// Display symbols for the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    player_one: char,
    player_two: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            player_one: PLAYER_ONE_MARKER,
            player_two: PLAYER_TWO_MARKER,
        }
    }
}

impl Markers {
    /// Markers must be visible and tell the players apart.
    pub fn new(player_one: char, player_two: char) -> Result<Self, ConfigError> {
        let visible = |c: char| !c.is_whitespace() && !c.is_control();
        if player_one == player_two || !visible(player_one) || !visible(player_two) {
            return Err(ConfigError::Markers {
                player_one,
                player_two,
            });
        }
        Ok(Self {
            player_one,
            player_two,
        })
    }

    pub fn marker(&self, player: Player) -> char {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    pub fn cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => BLANK_MARKER,
            Cell::Occupied(player) => self.marker(player),
        }
    }
}

/// Draw the whole board, starting with a blank line.
pub fn render_board(board: &Board, markers: &Markers) -> String {
    let size = board.size();
    let mut out = String::from("\n");
    let rule = vec![CELL_RULE; size].join("-");
    let cells: Vec<char> = board.cells().map(|(_, cell)| markers.cell(cell)).collect();

    for (row, row_cells) in cells.chunks(size).enumerate() {
        if row > 0 {
            out.push_str(&rule);
            out.push('\n');
        }
        for line in 0..CELL_LINES {
            for (col, &mark) in row_cells.iter().enumerate() {
                if col > 0 {
                    out.push('|');
                }
                if line == CELL_LINES / 2 {
                    out.push(' ');
                    out.push(mark);
                    out.push(' ');
                } else {
                    out.push_str("   ");
                }
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(3);
        let expected = "\n   |   |   \n   |   |   \n   |   |   \n-----------\n   |   |   \n   |   |   \n   |   |   \n-----------\n   |   |   \n   |   |   \n   |   |   \n";
        assert_eq!(render_board(&board, &Markers::default()), expected);
    }

    #[test]
    fn test_render_places_markers_on_middle_line() {
        let mut board = Board::new(2);
        board.set(0, 0, Cell::Occupied(Player::One)).unwrap();
        board.set(1, 1, Cell::Occupied(Player::Two)).unwrap();

        let text = render_board(&board, &Markers::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], " X |   ");
        assert_eq!(lines[4], "-------");
        assert_eq!(lines[6], "   | O ");
    }

    #[test]
    fn test_custom_markers() {
        let markers = Markers::new('A', 'B').unwrap();
        assert_eq!(markers.marker(Player::One), 'A');
        assert_eq!(markers.cell(Cell::Occupied(Player::Two)), 'B');
        assert_eq!(markers.cell(Cell::Empty), ' ');
    }

    #[test]
    fn test_rejects_bad_markers() {
        assert!(Markers::new('X', 'X').is_err());
        assert!(Markers::new(' ', 'O').is_err());
        assert!(Markers::new('X', '\t').is_err());
    }
}
