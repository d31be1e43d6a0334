//! Tic-Tac-Toe in the terminal.
//!
//! ## Usage
//!
//! - `tictactoe` - Start the menu (choose 1 or 2 players, `q` to quit)
//! - `tictactoe --players 1` - Play a single game against the computer
//! - `tictactoe --size 4 --seed 7` - Larger board, reproducible computer moves
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe::config::GameConfig;
use tictactoe::constants::{DEFAULT_SIZE, PLAYER_ONE_MARKER, PLAYER_TWO_MARKER};
use tictactoe::game::GameMode;
use tictactoe::session::Session;

/// Tic-Tac-Toe against a friend or a random computer player
#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for the computer player's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Marker shown for player 1
    #[arg(long, default_value_t = PLAYER_ONE_MARKER)]
    player_one: char,

    /// Marker shown for player 2
    #[arg(long, default_value_t = PLAYER_TWO_MARKER)]
    player_two: char,

    /// Play one game with this many human players instead of showing the menu
    #[arg(long)]
    players: Option<u32>,
}

/// Reject an unsupported `--players` count before any game starts.
fn single_game_players(players: Option<u32>) -> Result<Option<u32>> {
    if let Some(count) = players {
        GameMode::from_player_count(count).context("invalid --players")?;
    }
    Ok(players)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.size, cli.player_one, cli.player_two)
        .context("invalid game configuration")?;
    let players = single_game_players(cli.players)?;

    let rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    info!(size = config.size, seed = ?cli.seed, "starting session");

    let mut session = Session::new(io::stdin().lock(), io::stdout(), config, rng);
    match players {
        Some(count) => {
            session.play(count).context("game aborted")?;
            session.farewell()?;
        }
        None => {
            session.run().context("session aborted")?;
        }
    }
    Ok(())
}
