//! Tic-Tac-Toe: a small text-mode board game engine.
//!
//! Two humans, or one human against a computer that plays uniformly random
//! legal moves, take turns on an NxN board (3x3 by default).
//!
//! ## Modules
//!
//! - [`board`] - Board state, players, and coordinates
//! - [`moves`] - Parsing and validating player moves
//! - [`rules`] - Win and tie detection
//! - [`ai`] - Random move selection for the computer player
//! - [`game`] - Turn controller state machine
//! - [`render`] - Text drawing of the board
//! - [`console`] - Text front end over any reader/writer
//! - [`score`] - Score tally across games
//! - [`session`] - Menu loop around repeated games
//! - [`config`] - Game configuration
//! - [`constants`] - Defaults and limits
//!
//! ## Example
//!
//! ```
//! use tictactoe::board::{Board, Cell, Coordinate, Player};
//! use tictactoe::moves::{parse_coordinate, validate_and_apply};
//! use tictactoe::rules::{GameOutcome, evaluate};
//!
//! let mut board = Board::new(3);
//! for input in ["1,1", "1,2", "1,3"] {
//!     let at = parse_coordinate(input, board.size()).unwrap();
//!     validate_and_apply(&mut board, at, Player::One).unwrap();
//! }
//!
//! assert_eq!(board.get(0, 2), Ok(Cell::Occupied(Player::One)));
//! assert_eq!(evaluate(&board), GameOutcome::Win(Player::One));
//! assert_eq!(Coordinate::new(0, 2).to_string(), "1,3");
//! ```

pub mod ai;
pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod game;
pub mod moves;
pub mod render;
pub mod rules;
pub mod score;
pub mod session;
