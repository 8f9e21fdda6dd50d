//! Game session management.
//!
//! Each session owns one [`Game`]; boards are never shared between
//! sessions, so concurrent games cannot interfere with each other.

use crate::games::tictactoe::{Game, GameStatus, Position, TurnError, TurnReport};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A finished game, ready for ledger reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedGame {
    /// True when the player won outright. A draw is reported as a
    /// non-win, matching the ledger's contract.
    pub player_won: bool,
    /// True when the game ended in a draw.
    pub draw: bool,
}

/// Errors from session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// No session with the requested id.
    #[display("Session not found")]
    NotFound,
    /// A session with the requested id already exists.
    #[display("Session already exists")]
    AlreadyExists,
    /// The move itself was rejected.
    #[display("{_0}")]
    #[from]
    Turn(TurnError),
}

/// A game session: one player against the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// The game state.
    pub game: Game,
}

impl GameSession {
    /// Creates a new game session.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            game: Game::new(),
        }
    }

    /// Plays one turn, resetting the board when the game ends.
    ///
    /// The returned [`TurnReport`] carries the final board snapshot,
    /// so callers still see the finished position after the reset.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn play_turn(
        &mut self,
        pos: Position,
    ) -> Result<(TurnReport, Option<FinishedGame>), TurnError> {
        let report = self.game.play_turn(pos).map_err(|e| {
            warn!(position = ?pos, error = %e, "Move rejected");
            e
        })?;

        let finished = match report.status {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(FinishedGame {
                player_won: mark == Game::PLAYER,
                draw: false,
            }),
            GameStatus::Draw => Some(FinishedGame {
                player_won: false,
                draw: true,
            }),
        };

        if let Some(result) = finished {
            info!(
                session_id = %self.id,
                player_won = result.player_won,
                draw = result.draw,
                "Game finished, resetting board"
            );
            self.game.reset();
        }

        Ok((report, finished))
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new game session, generating an id when none is given.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: Option<SessionId>) -> Result<SessionId, SessionError> {
        let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let mut sessions = self.sessions.lock().unwrap();

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists);
        }

        sessions.insert(id.clone(), GameSession::new(id.clone()));
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Gets a snapshot of a session by ID.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(id).cloned();

        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }

        session
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().unwrap();
        let ids: Vec<_> = sessions.keys().cloned().collect();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }

    /// Plays a turn in a session while holding the lock.
    ///
    /// Keeps the read-modify-write atomic so two requests for the same
    /// session cannot interleave their moves.
    #[instrument(skip(self))]
    pub fn play_turn(
        &self,
        session_id: &str,
        pos: Position,
    ) -> Result<(TurnReport, Option<FinishedGame>), SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(session_id).ok_or(SessionError::NotFound)?;
        Ok(session.play_turn(pos)?)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
