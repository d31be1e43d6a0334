//! Turn controller.
//!
//! A game is a small state machine: `Turn(player)` repeats until the board
//! evaluates to a win or tie, then it sits in `Finished(outcome)`. Each turn
//! renders the board, gets a move from the current player's source, applies
//! it, and hands the turn to the opponent.
//!
//! All text I/O goes through a [`Frontend`]; the controller never formats
//! anything itself.

use std::io;

use derive_more::{Display, Error, From};
use tracing::{debug, info};

use crate::ai::{CellSampler, select_move};
use crate::board::{Board, Coordinate, Player};
use crate::config::ConfigError;
use crate::moves::{MoveError, parse_coordinate, validate_and_apply};
use crate::rules::{GameOutcome, evaluate};

/// What the game needs from the outside world.
pub trait Frontend {
    /// Show the board. Called before every turn and once after the game ends.
    fn render(&mut self, board: &Board) -> io::Result<()>;

    /// Ask a human for a move. `Ok(None)` means input has ended.
    fn request_move(&mut self, player: Player) -> io::Result<Option<String>>;

    /// Tell a human why their move was refused. They will be asked again.
    fn reject_move(&mut self, player: Player, error: MoveError) -> io::Result<()>;

    /// Report the cell the computer chose.
    fn announce_computer_move(&mut self, player: Player, at: Coordinate) -> io::Result<()>;
}

/// Who is at the keyboard for each player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Player 1 is human, player 2 is the computer.
    SinglePlayer,
    /// Both players are human.
    TwoPlayer,
}

impl GameMode {
    pub fn from_player_count(count: u32) -> Result<Self, ConfigError> {
        match count {
            1 => Ok(GameMode::SinglePlayer),
            2 => Ok(GameMode::TwoPlayer),
            requested => Err(ConfigError::PlayerCount { requested }),
        }
    }

    pub fn move_source(self, player: Player) -> MoveSource {
        match (self, player) {
            (GameMode::SinglePlayer, Player::Two) => MoveSource::Computer,
            _ => MoveSource::Human,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveSource {
    Human,
    Computer,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnState {
    Turn(Player),
    Finished(GameOutcome),
}

/// Reasons a game stops before reaching an outcome.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    #[display("{_0}")]
    Config(ConfigError),
    #[display("input ended before the game finished")]
    #[from(ignore)]
    InputClosed,
    #[display("front end I/O failed: {_0}")]
    Io(io::Error),
}

/// One game in progress on a borrowed board.
pub struct Game<'a> {
    board: &'a mut Board,
    mode: GameMode,
    state: TurnState,
}

impl<'a> Game<'a> {
    /// Start a game on `board` as it stands. Player 1 moves first.
    pub fn new(board: &'a mut Board, mode: GameMode) -> Self {
        Self {
            board,
            mode,
            state: TurnState::Turn(Player::One),
        }
    }

    pub fn board(&self) -> &Board {
        &*self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Advance the state machine by one transition.
    ///
    /// Finishing the game and playing a move are separate steps, so a call
    /// that plays the winning move still returns `Turn(..)`.
    pub fn step<F, R>(&mut self, frontend: &mut F, rng: &mut R) -> Result<TurnState, GameError>
    where
        F: Frontend + ?Sized,
        R: CellSampler + ?Sized,
    {
        let TurnState::Turn(player) = self.state else {
            return Ok(self.state);
        };

        let outcome = evaluate(self.board);
        if outcome.is_finished() {
            info!(?outcome, "game finished");
            self.state = TurnState::Finished(outcome);
            return Ok(self.state);
        }

        frontend.render(self.board)?;
        match self.mode.move_source(player) {
            MoveSource::Human => {
                self.human_move(player, frontend)?;
            }
            MoveSource::Computer => {
                let at = self.computer_move(player, rng);
                frontend.announce_computer_move(player, at)?;
            }
        }

        self.state = TurnState::Turn(player.opponent());
        Ok(self.state)
    }

    /// Play until the game ends, then render the final board.
    pub fn play<F, R>(&mut self, frontend: &mut F, rng: &mut R) -> Result<GameOutcome, GameError>
    where
        F: Frontend + ?Sized,
        R: CellSampler + ?Sized,
    {
        loop {
            if let TurnState::Finished(outcome) = self.step(frontend, rng)? {
                frontend.render(self.board)?;
                return Ok(outcome);
            }
        }
    }

    /// Keep asking until the player supplies a legal move.
    fn human_move<F: Frontend + ?Sized>(
        &mut self,
        player: Player,
        frontend: &mut F,
    ) -> Result<Coordinate, GameError> {
        loop {
            let Some(line) = frontend.request_move(player)? else {
                return Err(GameError::InputClosed);
            };
            let attempt = parse_coordinate(&line, self.board.size())
                .and_then(|at| validate_and_apply(self.board, at, player).map(|()| at));
            match attempt {
                Ok(at) => return Ok(at),
                Err(error) => {
                    debug!(%player, input = line.trim(), %error, "move rejected");
                    frontend.reject_move(player, error)?;
                }
            }
        }
    }

    fn computer_move<R>(&mut self, player: Player, rng: &mut R) -> Coordinate
    where
        R: CellSampler + ?Sized,
    {
        let Some(at) = select_move(self.board, rng) else {
            panic!("computer asked to move on a full board");
        };
        if let Err(error) = validate_and_apply(self.board, at, player) {
            panic!("computer selected illegal cell {at}: {error}");
        }
        at
    }
}

/// Reset `board` and play one game with `player_count` humans.
///
/// An unsupported player count is returned as [`GameError::Config`] before
/// the board is touched.
pub fn start_game<F, R>(
    player_count: u32,
    board: &mut Board,
    frontend: &mut F,
    rng: &mut R,
) -> Result<GameOutcome, GameError>
where
    F: Frontend + ?Sized,
    R: CellSampler + ?Sized,
{
    let mode = GameMode::from_player_count(player_count)?;
    board.reset();
    info!(?mode, size = board.size(), "game started");
    Game::new(board, mode).play(frontend, rng)
}
