//! Turn controller for a game against the engine.

use super::position::Position;
use super::rules;
use super::search;
use super::types::{Board, GameStatus, Mark, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Errors that can occur when playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TurnError {
    /// Square is already occupied.
    #[display("Square is already occupied")]
    SquareOccupied,
    /// Game has already ended.
    #[display("Game is already over")]
    GameOver,
}

/// What happened during one turn: the player's move, the engine's
/// reply (if the game was still open), and the resulting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Where the player placed X.
    pub player_move: Position,
    /// Where the engine placed O, if it got to reply.
    pub engine_reply: Option<Position>,
    /// Status after both moves.
    pub status: GameStatus,
    /// Board snapshot after both moves.
    pub board: Board,
}

/// A single game of tic-tac-toe against the engine.
///
/// The game owns its board: sessions never share one, so several
/// games can run concurrently without cross-talk. The player always
/// holds X and moves first; the engine replies with O within the same
/// turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Mark held by the human player.
    pub const PLAYER: Mark = Mark::X;

    /// Mark held by the engine.
    pub const ENGINE: Mark = Mark::O;

    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history (player and engine moves interleaved).
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Plays one full turn: the player's move, then the engine's reply.
    ///
    /// The player move is rejected with no state change if the square
    /// is occupied or the game is over. The engine only replies if the
    /// player's move leaves the game open; a winning or drawing player
    /// move ends the turn immediately.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameOver`] if the game has ended and
    /// [`TurnError::SquareOccupied`] if the square is taken. Neither
    /// changes the board or status.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn play_turn(&mut self, pos: Position) -> Result<TurnReport, TurnError> {
        if self.status.is_over() {
            return Err(TurnError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(TurnError::SquareOccupied);
        }

        self.board.set(pos, Square::Occupied(Self::PLAYER));
        self.history.push(pos);
        self.status = rules::status(&self.board);
        debug!(position = ?pos, status = %self.status, "Player move placed");

        let mut engine_reply = None;
        if self.status == GameStatus::InProgress {
            // An open board after a player move always has a reply.
            if let Some(reply) = search::best_move(&mut self.board, Self::ENGINE) {
                self.board.set(reply, Square::Occupied(Self::ENGINE));
                self.history.push(reply);
                self.status = rules::status(&self.board);
                engine_reply = Some(reply);
                debug!(position = ?reply, status = %self.status, "Engine reply placed");
            }
        }

        if self.status.is_over() {
            info!(
                status = %self.status,
                moves = self.history.len(),
                "Game finished"
            );
        }

        Ok(TurnReport {
            player_move: pos,
            engine_reply,
            status: self.status,
            board: self.board.clone(),
        })
    }

    /// Resets to an empty board for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::InProgress;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
