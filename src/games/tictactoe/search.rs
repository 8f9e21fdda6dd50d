//! Exhaustive minimax search for the engine opponent.
//!
//! The game tree is small enough (at most 9 plies) that the search
//! enumerates it completely: no pruning, no caching. Terminal positions
//! score `+10` for an engine win, `-10` for a player win and `0` for a
//! draw, with no depth discount. The missing discount is a known
//! non-optimality kept on purpose: among several forced wins the engine
//! may settle for a slower one, and among forced losses it may not pick
//! the longest defense. It still never loses from a position where a
//! draw is available.

use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Mark, Square};
use tracing::{debug, instrument};

/// Score of a terminal position won by the engine.
pub const WIN_SCORE: i32 = 10;

/// Score of a terminal position won by the player.
pub const LOSS_SCORE: i32 = -10;

/// Scores a position for the engine holding `engine` mark.
///
/// When `maximizing` is true the engine is to move, otherwise the
/// player is. Trials are placed and reverted in increasing index
/// order, so the board is identical to its pre-call state on return.
pub fn minimax(board: &mut Board, engine: Mark, maximizing: bool) -> i32 {
    match rules::status(board) {
        GameStatus::Won(mark) => {
            if mark == engine {
                WIN_SCORE
            } else {
                LOSS_SCORE
            }
        }
        GameStatus::Draw => 0,
        GameStatus::InProgress => {
            let mover = if maximizing { engine } else { engine.opponent() };
            let mut best = if maximizing { i32::MIN } else { i32::MAX };

            for pos in Position::ALL {
                if !board.is_empty(pos) {
                    continue;
                }
                board.set(pos, Square::Occupied(mover));
                let score = minimax(board, engine, !maximizing);
                board.set(pos, Square::Empty);

                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }

            best
        }
    }
}

/// Selects the engine's move for the current board.
///
/// Each empty square is tried in increasing index order and scored
/// with the player to reply; the first square whose score strictly
/// beats the best seen so far wins. The strict comparison is the
/// tie-break rule: equal-scoring later squares are ignored. Returns
/// `None` only on a full board, which callers must not present.
///
/// The board is unchanged on return; the caller places the move.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board, engine: Mark) -> Option<Position> {
    let mut best_score = i32::MIN;
    let mut best = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(engine));
        let score = minimax(board, engine, false);
        board.set(pos, Square::Empty);

        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    debug!(?best, best_score, "Selected engine move");
    best
}
