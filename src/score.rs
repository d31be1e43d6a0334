//! Running score across the games of a session.

use derive_more::Display;

use crate::board::Player;
use crate::rules::GameOutcome;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display)]
#[display("SCORE - Player 1: {player_one}, Player 2: {player_two}, Ties: {ties}")]
pub struct ScoreTally {
    pub ties: u32,
    pub player_one: u32,
    pub player_two: u32,
}

impl ScoreTally {
    /// Count a finished game. Returns `false` for an unfinished one, which is
    /// left out of the tally.
    pub fn record(&mut self, outcome: GameOutcome) -> bool {
        match outcome {
            GameOutcome::InProgress => return false,
            GameOutcome::Tie => self.ties += 1,
            GameOutcome::Win(Player::One) => self.player_one += 1,
            GameOutcome::Win(Player::Two) => self.player_two += 1,
        }
        true
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    pub fn games(&self) -> u32 {
        self.ties + self.player_one + self.player_two
    }
}
