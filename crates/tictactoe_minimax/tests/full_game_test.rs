//! Whole-game scenarios driven through the public game engine.

use tictactoe_minimax::{Game, GameConfig, GameState, Mark, Move, MoveError, Side};

/// Plays both sides with the minimax strategy until the game ends.
fn play_out(mut game: Game) -> Game {
    while !game.state().is_terminal() {
        game.play_best_move().expect("live game accepts the best move");
    }
    game
}

#[test]
fn test_optimal_player_first_is_a_draw() {
    let game = play_out(Game::new(3));

    assert_eq!(game.state(), GameState::Draw);
    assert!(game.board().is_full());
    let expected = [
        Move::new(0, 0, Mark::Player),
        Move::new(1, 1, Mark::Computer),
        Move::new(0, 1, Mark::Player),
        Move::new(0, 2, Mark::Computer),
        Move::new(2, 0, Mark::Player),
        Move::new(1, 0, Mark::Computer),
        Move::new(1, 2, Mark::Player),
        Move::new(2, 1, Mark::Computer),
        Move::new(2, 2, Mark::Player),
    ];
    assert_eq!(game.history(), &expected);
}

#[test]
fn test_optimal_computer_first_is_a_draw() {
    let game = play_out(Game::with_first_turn(3, Side::Computer));
    assert_eq!(game.state(), GameState::Draw);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_computer_never_loses_to_any_opening() {
    for row in 0..3 {
        for col in 0..3 {
            let mut game = Game::new(3);
            game.play(row, col).unwrap();
            let game = play_out(game);
            assert_eq!(
                game.state(),
                GameState::Draw,
                "opening at ({row}, {col}) should be drawn with best play"
            );
        }
    }
}

#[test]
fn test_computer_punishes_weak_player() {
    // Player always takes the first free cell in row-major order.
    let mut game = Game::new(3);
    while !game.state().is_terminal() {
        match game.to_move() {
            Some(Side::Player) => {
                let (row, col) = game.board().empty_cells().next().unwrap();
                game.play(row, col).unwrap();
            }
            Some(Side::Computer) => {
                game.play_best_move().unwrap();
            }
            None => unreachable!(),
        }
    }
    assert_eq!(game.state(), GameState::ComputerWon);
}

#[test]
fn test_human_move_validation_round_trip() {
    let mut game = Game::from_config(&GameConfig::default());
    assert_eq!(game.play(0, 5), Err(MoveError::OutOfRange { row: 0, col: 5 }));
    assert_eq!(game.play(1, 1), Ok(GameState::ComputerTurn));
    let reply = game.play_best_move().unwrap();
    assert_eq!(reply, Move::new(0, 0, Mark::Computer));
    assert_eq!(game.play(0, 0), Err(MoveError::Occupied { row: 0, col: 0 }));
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn test_player_win_is_reported() {
    // Computer opens; the player completes the middle column.
    let mut game = Game::with_first_turn(3, Side::Computer);
    for (r, c) in [(0, 0), (0, 1), (2, 2), (1, 1), (2, 0)] {
        game.play(r, c).unwrap();
    }
    assert_eq!(game.play(2, 1), Ok(GameState::PlayerWon));
    assert_eq!(game.state().winner(), Some(Side::Player));
    assert_eq!(game.play_best_move(), Err(MoveError::GameOver));
}
