//! Line-oriented text front end.
//!
//! Works over any reader/writer pair so the same code drives a terminal and
//! scripted tests. Output is flushed after every message because prompts do
//! not end in a newline.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::board::{Board, Coordinate, Player};
use crate::game::Frontend;
use crate::moves::MoveError;
use crate::render::{Markers, render_board};

pub struct TextConsole<R, W> {
    input: R,
    output: W,
    markers: Markers,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(input: R, output: W, markers: Markers) -> Self {
        Self {
            input,
            output,
            markers,
        }
    }

    /// Next input line without its line ending. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than reported, so a garbled line is
    /// just another bad reply.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Write `text` as-is and flush.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Frontend for TextConsole<R, W> {
    fn render(&mut self, board: &Board) -> io::Result<()> {
        let text = render_board(board, &self.markers);
        self.say(text)
    }

    fn request_move(&mut self, player: Player) -> io::Result<Option<String>> {
        self.say(format_args!(
            "\nPlayer {}, enter your move (x,y): ",
            player.number()
        ))?;
        self.read_line()
    }

    fn reject_move(&mut self, _player: Player, error: MoveError) -> io::Result<()> {
        if error.is_format_error() {
            self.say(format_args!(
                "Invalid move coordinate: {error}. Please use form (x,y).\n"
            ))
        } else {
            self.say(format_args!("Invalid move coordinate: {error}.\n"))
        }
    }

    fn announce_computer_move(&mut self, _player: Player, at: Coordinate) -> io::Result<()> {
        self.say(format_args!("\nTerrAI selects <{at}>\n"))
    }
}
