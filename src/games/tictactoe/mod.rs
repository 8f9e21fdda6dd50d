//! Tic-tac-toe against a perfect-play engine opponent.

mod game;
mod position;
mod rules;
mod search;
mod types;

pub use game::{Game, TurnError, TurnReport};
pub use position::Position;
pub use rules::{check_winner, is_draw, status, WIN_LINES};
pub use search::{best_move, minimax, LOSS_SCORE, WIN_SCORE};
pub use types::{Board, GameStatus, Mark, Square};
