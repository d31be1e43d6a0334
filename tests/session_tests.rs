//! End-to-end sessions driven through the text front end.
//!
//! Each test feeds a full transcript of keyboard input and checks what the
//! player would have seen.

use tictactoe::config::GameConfig;
use tictactoe::score::ScoreTally;
use tictactoe::session::Session;

/// Run a whole session on `input` and return the tally and printed output.
fn run_session(input: impl AsRef<[u8]>, config: GameConfig, seed: u64) -> (ScoreTally, String) {
    let mut session = Session::new(
        input.as_ref(),
        Vec::new(),
        config,
        fastrand::Rng::with_seed(seed),
    );
    let tally = session.run().unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    (tally, output)
}

#[test]
fn test_two_player_tie() {
    // X O X / O X X / O X O
    let moves = ["1,1", "1,2", "1,3", "2,1", "2,2", "3,1", "2,3", "3,3", "3,2"];
    let input = format!("2\n{}\nq\n", moves.join("\n"));

    let (tally, out) = run_session(&input, GameConfig::default(), 1);
    assert_eq!(tally.ties, 1);
    assert_eq!(tally.games(), 1);
    assert!(out.contains("SCORE - Player 1: 0, Player 2: 0, Ties: 1"));
    assert_eq!(out.matches("Player 1, enter your move").count(), 5);
    assert_eq!(out.matches("Player 2, enter your move").count(), 4);
}

#[test]
fn test_player_two_wins_after_retries() {
    // O takes the middle column; X stumbles over bad input on the way.
    let input = "2\n1,1\n1,2\nnope\n1,1\n3,3\n2,2\n2,1\n3,2\nq\n";

    let (tally, out) = run_session(input, GameConfig::default(), 1);
    assert_eq!(tally.player_two, 1);
    assert!(out.contains("Did not detect x or y. Please use form (x,y)."));
    assert!(out.contains("Invalid move coordinate: Cell already taken."));
    assert!(out.contains("SCORE - Player 1: 0, Player 2: 1, Ties: 0"));
}

#[test]
fn test_single_player_only_prompts_player_one() {
    // Enough input to fill the board in order; cells the computer took are
    // rejected and the next line is tried. The leading space makes any lines
    // left over after the game invalid menu replies instead of new games.
    let input = "1\n 1,1\n 1,2\n 1,3\n 2,1\n 2,2\n 2,3\n 3,1\n 3,2\n 3,3\nq\n";

    let (tally, out) = run_session(input, GameConfig::default(), 77);
    assert_eq!(tally.games(), 1);
    assert!(!out.contains("Player 2, enter your move"));
    assert!(out.contains("TerrAI selects <"));
    assert!(out.ends_with("Thank you for playing!\n"));
}

#[test]
fn test_score_accumulates_across_games() {
    let x_wins = "2\n1,1\n2,1\n1,2\n2,2\n1,3\n";
    let input = format!("{x_wins}{x_wins}q\n");

    let (tally, out) = run_session(&input, GameConfig::default(), 1);
    assert_eq!(tally.player_one, 2);
    assert!(out.contains("SCORE - Player 1: 1, Player 2: 0, Ties: 0"));
    assert!(out.contains("SCORE - Player 1: 2, Player 2: 0, Ties: 0"));
}

#[test]
fn test_board_resets_between_games() {
    // The second game reuses cells taken in the first.
    let first = "2\n1,1\n2,1\n1,2\n2,2\n1,3\n";
    let second = "2\n2,1\n1,1\n2,2\n1,2\n2,3\n";
    let input = format!("{first}{second}q\n");

    let (tally, out) = run_session(&input, GameConfig::default(), 1);
    assert_eq!(tally.player_one, 2);
    assert!(!out.contains("Cell already taken"));
}

#[test]
fn test_larger_board_and_custom_markers() {
    let config = GameConfig::new(4, 'A', 'B').unwrap();
    // A fills the first row of a 4x4 board.
    let input = "2\n1,1\n2,1\n1,2\n2,2\n1,3\n2,3\n1,4\nq\n";

    let (tally, out) = run_session(input, config, 1);
    assert_eq!(tally.player_one, 1);
    assert!(out.contains(" A | A | A | A "));
    assert!(out.contains(" B | B | B |   "));
    assert!(out.contains("---------------"));
}

#[test]
fn test_out_of_bounds_on_default_board() {
    let input = "2\n4,4\n0,1\n-1,2\n1,1\n";

    let (tally, out) = run_session(input, GameConfig::default(), 1);
    assert_eq!(tally.games(), 0);
    assert_eq!(out.matches("Cell out of bounds.").count(), 3);
    assert!(out.ends_with("Thank you for playing!\n"));
}

#[test]
fn test_invalid_utf8_is_a_bad_reply() {
    // Garbled bytes at the menu, then again at player 1's first move.
    let input = b"\xff\xfe\n2\n\xff\xfe\n1,1\n2,1\n1,2\n2,2\n1,3\nq\n";

    let (tally, out) = run_session(input, GameConfig::default(), 1);
    assert_eq!(tally.player_one, 1);
    assert!(out.contains("Invalid number of players: Please choose [1], [2], or [q]."));
    assert!(out.contains("Did not detect x or y. Please use form (x,y)."));
    assert_eq!(out.matches("Player 1, enter your move").count(), 4);
    assert!(out.ends_with("Thank you for playing!\n"));
}
