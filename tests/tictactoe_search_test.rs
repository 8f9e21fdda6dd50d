//! Tests for the minimax search and move selector.

use arcade_games::{best_move, minimax, Board, Mark, Position, Square, LOSS_SCORE, WIN_SCORE};

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

#[test]
fn test_search_does_not_mutate_board() {
    let mut board = board_from([X, E, E, O, X, E, E, E, E]);
    let before = board.clone();

    minimax(&mut board, Mark::O, true);
    assert_eq!(board, before);

    best_move(&mut board, Mark::O);
    assert_eq!(board, before);
}

#[test]
fn test_selector_targets_empty_square() {
    let mut board = board_from([X, O, X, E, X, O, E, E, E]);
    let reply = best_move(&mut board, Mark::O).unwrap();
    assert!(board.is_empty(reply));
}

#[test]
fn test_placing_selected_move_removes_one_empty_square() {
    let mut board = board_from([X, E, E, E, O, E, E, X, E]);
    let before = board.empty_count();

    let reply = best_move(&mut board, Mark::O).unwrap();
    board.set(reply, O);
    assert_eq!(board.empty_count(), before - 1);
}

#[test]
fn test_center_opening_answered_at_index_zero() {
    // Player opens at the center. Only corners hold the draw, and the
    // first-maximal tie-break selects the lowest index among them.
    let mut board = board_from([E, E, E, E, X, E, E, E, E]);
    let reply = best_move(&mut board, Mark::O).unwrap();

    assert_eq!(reply, Position::TopLeft);
    assert_eq!(reply.to_index(), 0);
}

#[test]
fn test_engine_completes_own_line() {
    // O threatens the left column at 6 while X threatens nothing yet.
    let mut board = board_from([O, X, X, O, X, E, E, E, E]);
    assert_eq!(best_move(&mut board, Mark::O), Some(Position::BottomLeft));
}

#[test]
fn test_forced_win_scores_win() {
    // O to move with the left column open at 6; an immediate win.
    let mut board = board_from([O, X, X, O, X, E, E, E, O]);
    assert_eq!(minimax(&mut board, Mark::O, true), WIN_SCORE);
}

#[test]
fn test_forced_loss_scores_loss() {
    // X threatens both 2 (top row) and 6 (left column); O cannot block
    // both, so every continuation loses.
    let mut board = board_from([X, X, E, X, O, E, E, E, O]);
    assert_eq!(minimax(&mut board, Mark::O, true), LOSS_SCORE);
}

#[test]
fn test_perfect_play_from_empty_board_is_a_draw() {
    // Engine versus engine: alternate best_move for both sides and the
    // game must end level.
    let mut board = Board::new();
    let mut mover = Mark::X;

    loop {
        match arcade_games::status(&board) {
            arcade_games::GameStatus::InProgress => {}
            arcade_games::GameStatus::Draw => break,
            arcade_games::GameStatus::Won(mark) => panic!("unexpected winner {:?}", mark),
        }
        let pos = best_move(&mut board, mover).unwrap();
        board.set(pos, Square::Occupied(mover));
        mover = mover.opponent();
    }

    assert!(board.is_full());
}
