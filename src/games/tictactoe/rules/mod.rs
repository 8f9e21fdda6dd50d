//! Game rules: terminal-state detection.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{check_winner, WIN_LINES};

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Determines the status of a board.
///
/// Total over any board: a completed line wins for its mark, a full
/// board with no line is a draw, anything else is still in progress.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
