//! Tests for the turn controller and terminal-state detection.

use arcade_games::{
    check_winner, status, Board, Game, GameStatus, Mark, Position, Square, WIN_LINES,
};

const E: Square = Square::Empty;
const X: Square = Square::Occupied(Mark::X);
const O: Square = Square::Occupied(Mark::O);

fn board_from(marks: [Square; 9]) -> Board {
    let mut board = Board::new();
    for (i, square) in marks.into_iter().enumerate() {
        board.set(Position::from_index(i).unwrap(), square);
    }
    board
}

/// Builds an in-progress game holding the given position.
///
/// Games are normally built through play; tests reach mid-game
/// positions through the serde representation instead.
fn game_with_board(marks: [Square; 9]) -> Game {
    let board = board_from(marks);
    let history: Vec<Position> = Vec::new();
    let value = serde_json::json!({
        "board": board,
        "status": GameStatus::InProgress,
        "history": history,
    });
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_undecided_with_open_squares() {
    let board = board_from([X, O, E, E, X, E, E, E, O]);
    assert_eq!(status(&board), GameStatus::InProgress);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board_from([X, O, X, X, O, O, O, X, X]);
    assert_eq!(status(&board), GameStatus::Draw);
}

#[test]
fn test_every_win_line_is_detected() {
    for line in WIN_LINES {
        for mark in [Mark::X, Mark::O] {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(mark));
            }
            assert_eq!(check_winner(&board), Some(mark));
            assert_eq!(status(&board), GameStatus::Won(mark));
        }
    }
}

#[test]
fn test_player_win_detected_before_engine_reply() {
    // [X, X, _, O, O, _, _, _, _] with the player to move at 2.
    let mut game = game_with_board([X, X, E, O, O, E, E, E, E]);

    let report = game.play_turn(Position::TopRight).unwrap();
    assert_eq!(report.status, GameStatus::Won(Mark::X));
    assert_eq!(report.engine_reply, None);
    assert_eq!(report.board.get(Position::TopRight), X);
}

#[test]
fn test_rejected_move_changes_nothing() {
    let mut game = Game::new();
    game.play_turn(Position::Center).unwrap();
    let snapshot = game.clone();

    assert!(game.play_turn(Position::Center).is_err());
    assert_eq!(game, snapshot);
}

#[test]
fn test_finished_game_rejects_further_moves() {
    let mut game = game_with_board([X, X, E, O, O, E, E, E, E]);
    game.play_turn(Position::TopRight).unwrap();

    let snapshot = game.clone();
    assert!(game.play_turn(Position::MiddleRight).is_err());
    assert_eq!(game, snapshot);
}

#[test]
fn test_each_turn_places_player_then_engine() {
    let mut game = Game::new();
    let report = game.play_turn(Position::Center).unwrap();

    assert_eq!(report.player_move, Position::Center);
    let reply = report.engine_reply.unwrap();
    assert_eq!(game.board().get(Position::Center), X);
    assert_eq!(game.board().get(reply), O);
    assert_eq!(game.history(), &[Position::Center, reply]);
}

#[test]
fn test_engine_never_loses_a_full_game() {
    // Drive several complete games with a naive first-empty player;
    // perfect play must never let the player win.
    for opening in Position::ALL {
        let mut game = Game::new();
        let mut report = game.play_turn(opening).unwrap();

        while report.status == GameStatus::InProgress {
            let next = Position::ALL
                .into_iter()
                .find(|p| game.board().is_empty(*p))
                .unwrap();
            report = game.play_turn(next).unwrap();
        }

        assert_ne!(report.status, GameStatus::Won(Mark::X), "opening {:?}", opening);
    }
}
