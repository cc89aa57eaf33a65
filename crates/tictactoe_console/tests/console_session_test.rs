//! End-to-end console sessions with scripted input.

use std::io::Cursor;
use tictactoe_console::{Console, play_and_record, play_game, save_record};
use tictactoe_minimax::{Game, GameRecord, GameState, Side, Symbols};

fn run(game: &mut Game, input: &str, hints: bool) -> (anyhow::Result<GameState>, String) {
    let mut console = Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        Symbols::default(),
    );
    let result = play_game(game, &mut console, hints);
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output)
}

#[test]
fn test_weak_player_loses_with_diagnostics() {
    // Bad number, then (1,1); occupied, out of range, then (1,2); then (2,1).
    let input = "abc\n1\n1\n1\n1\n4\n1\n1\n2\n2\n1\n";
    let mut game = Game::new(3);
    let (result, output) = run(&mut game, input, false);

    assert_eq!(result.unwrap(), GameState::ComputerWon);
    assert!(output.starts_with("Welcome to Tic-Tac-Toe!\n"));
    assert!(output.contains("Invalid input! Please enter a number."));
    assert!(output.contains("Invalid move! The cell is already occupied."));
    assert!(output.contains("Invalid move! Row and column must be within the board range."));
    assert!(output.ends_with(
        "\nX | X | O\n-----------\nX | O |  \n-----------\nO |   |  \n\nComputer wins! You lose!\n"
    ));
}

#[test]
fn test_following_hints_draws() {
    let input = "1\n1\n1\n2\n3\n1\n2\n3\n3\n3\n";
    let mut game = Game::new(3);
    let (result, output) = run(&mut game, input, true);

    assert_eq!(result.unwrap(), GameState::Draw);
    assert!(output.contains("Hint: row 1, column 1\n"));
    assert!(output.ends_with("It's a tie!\n"));
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_computer_first_opens_in_corner() {
    let mut game = Game::with_first_turn(3, Side::Computer);
    let (result, output) = run(&mut game, "", false);

    // Input runs out on the player's first turn.
    assert!(result.is_err());
    assert_eq!(game.history().len(), 1);
    assert!(output.contains("\nO |   |  \n"));
}

#[test]
fn test_custom_symbols_are_rendered() {
    let mut game = Game::new(3);
    let mut console = Console::new(
        Cursor::new(b"2\n2\n".to_vec()),
        Vec::new(),
        Symbols::new('#', '@'),
    );
    let result = play_game(&mut game, &mut console, false);
    assert!(result.is_err());
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("@ |   |  \n-----------\n  | # |  "));
}

#[test]
fn test_record_is_written() {
    let mut game = Game::new(3);
    let (result, _) = run(&mut game, "1\n1\n1\n2\n3\n1\n2\n3\n3\n3\n", false);
    assert_eq!(result.unwrap(), GameState::Draw);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.json");
    save_record(&game, &path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let record: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(*record.outcome(), GameState::Draw);
    assert_eq!(record.moves().len(), 9);
    assert_eq!(record.replay().unwrap(), game);
}

#[test]
fn test_abandoned_game_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abandoned.json");
    let mut game = Game::with_first_turn(3, Side::Computer);
    let mut console = Console::new(Cursor::new(b"2\n".to_vec()), Vec::new(), Symbols::default());

    let result = play_and_record(&mut game, &mut console, false, Some(&path));
    assert!(result.is_err());

    let json = std::fs::read_to_string(&path).unwrap();
    let record: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(*record.first_turn(), Side::Computer);
    assert_eq!(*record.outcome(), GameState::PlayerTurn);
    assert_eq!(record.moves().len(), 1);
    assert_eq!(record.replay().unwrap(), game);
}

#[test]
fn test_finished_game_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("finished.json");
    let mut game = Game::new(3);
    let input = "1\n1\n1\n2\n3\n1\n2\n3\n3\n3\n";
    let mut console = Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        Symbols::default(),
    );

    let outcome = play_and_record(&mut game, &mut console, false, Some(&path)).unwrap();
    assert_eq!(outcome, GameState::Draw);
    assert!(path.exists());
}
