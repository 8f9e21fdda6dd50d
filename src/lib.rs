//! Arcade Games library - casual games behind one engine and one API.
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe engine (board, rules, minimax search,
//!   turn controller) and the spin wheel
//! - **Session**: per-game session management, one owned board each
//! - **Server**: axum REST API for playing over HTTP
//! - **Reporter**: client for the external balance ledger
//!
//! # Example
//!
//! ```
//! use arcade_games::{Game, GameStatus, Position};
//!
//! let mut game = Game::new();
//! let report = game.play_turn(Position::Center).unwrap();
//! assert_eq!(report.status, GameStatus::InProgress);
//! assert!(report.engine_reply.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod reporter;
mod server;
mod session;

// Crate-level exports - configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - games
pub use games::spin::{self, SpinResult};
pub use games::tictactoe::{
    best_move, check_winner, is_draw, minimax, status, Board, Game, GameStatus, Mark, Position,
    Square, TurnError, TurnReport, LOSS_SCORE, WIN_LINES, WIN_SCORE,
};

// Crate-level exports - ledger reporting
pub use reporter::{BalanceUpdate, GameReport, OutcomeReporter, ReportError};

// Crate-level exports - HTTP server
pub use server::{
    router, run as run_http_server, AppState, BoardView, CreateSessionRequest,
    CreateSessionResponse, ErrorBody, MoveRequest, MoveResponse, SpinResponse,
};

// Crate-level exports - session management
pub use session::{FinishedGame, GameSession, SessionError, SessionId, SessionManager};
