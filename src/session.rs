//! Interactive session: the "how many players" menu around repeated games.
//!
//! ## Menu
//!
//! - `1` - one human against the computer
//! - `2` - two humans
//! - `q` - quit (so does end of input)
//!
//! Only the first character of the reply matters. The score is printed after
//! every finished game.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::ai::CellSampler;
use crate::board::Board;
use crate::config::GameConfig;
use crate::console::TextConsole;
use crate::game::{GameError, start_game};
use crate::score::ScoreTally;

/// A parsed menu reply.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play(u32),
    Quit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(line: &str) -> Self {
        match line.chars().next() {
            Some('q') => MenuChoice::Quit,
            Some(c) => c.to_digit(10).map_or(MenuChoice::Invalid, MenuChoice::Play),
            None => MenuChoice::Invalid,
        }
    }
}

/// Menu loop state. Owns the one board reused by every game.
pub struct Session<R, W, S> {
    console: TextConsole<R, W>,
    board: Board,
    tally: ScoreTally,
    rng: S,
}

impl<R: BufRead, W: Write, S: CellSampler> Session<R, W, S> {
    pub fn new(input: R, output: W, config: GameConfig, rng: S) -> Self {
        Self {
            console: TextConsole::new(input, output, config.markers),
            board: Board::new(config.size),
            tally: ScoreTally::default(),
            rng,
        }
    }

    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu until the player quits or input ends.
    pub fn run(&mut self) -> io::Result<ScoreTally> {
        self.console.say("\nWelcome to Tic-Tac-Toe!")?;
        loop {
            self.console
                .say("\n\nHow many players ([1] or [2], [q] to quit)? ")?;
            let Some(line) = self.console.read_line()? else {
                break;
            };
            match MenuChoice::parse(&line) {
                MenuChoice::Play(count) => {
                    if !self.play(count)? {
                        break;
                    }
                }
                MenuChoice::Quit => break,
                MenuChoice::Invalid => {
                    self.console.say(
                        "\nInvalid number of players: Please choose [1], [2], or [q].",
                    )?;
                }
            }
        }
        self.farewell()?;
        Ok(self.tally)
    }

    /// Play one game and print the updated score.
    ///
    /// Returns `false` when input ended mid-game and the session should stop.
    pub fn play(&mut self, player_count: u32) -> io::Result<bool> {
        match start_game(player_count, &mut self.board, &mut self.console, &mut self.rng) {
            Ok(outcome) => {
                self.tally.record(outcome);
                info!(?outcome, games = self.tally.games(), "score updated");
                let line = format!("\n{}", self.tally);
                self.console.say(line)?;
                Ok(true)
            }
            Err(GameError::Config(error)) => {
                warn!(%error, "game not started");
                self.console.say(format_args!("{error}"))?;
                Ok(true)
            }
            Err(GameError::InputClosed) => {
                info!("input closed mid-game");
                Ok(false)
            }
            Err(GameError::Io(error)) => Err(error),
        }
    }

    pub fn farewell(&mut self) -> io::Result<()> {
        self.console.say("\nThank you for playing!\n")
    }
}
