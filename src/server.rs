//! HTTP API for game sessions and the spin wheel.

use crate::config::ServerConfig;
use crate::games::spin::{self, SpinResult};
use crate::games::tictactoe::{Board, GameStatus, Position};
use crate::reporter::{BalanceUpdate, OutcomeReporter};
use crate::session::{SessionError, SessionManager};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Shared state for request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All active game sessions.
    pub sessions: SessionManager,
    /// Ledger client, absent when no endpoint is configured.
    pub reporter: Option<OutcomeReporter>,
}

/// Request to create a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Session id to use; generated when omitted.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response to session creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    /// Id of the created session.
    pub session_id: String,
}

/// Snapshot of a session's game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardView {
    /// Session id.
    pub session_id: String,
    /// The board.
    pub board: Board,
    /// Game status.
    pub status: GameStatus,
    /// Number of moves played so far.
    pub moves: usize,
    /// Human-readable board rendering.
    pub display: String,
}

/// Request to play a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Board index (0-8, row-major).
    pub position: usize,
}

/// Response to a played turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Where the player's X was placed.
    pub player_move: Position,
    /// Where the engine's O was placed, if it replied.
    pub engine_reply: Option<Position>,
    /// Status after the turn.
    pub status: GameStatus,
    /// Board after the turn. For a finished game this is the final
    /// position; the session itself has already been reset.
    pub board: Board,
    /// Updated balance when the game ended and the ledger answered.
    pub balance: Option<BalanceUpdate>,
    /// Ledger failure, surfaced instead of retried.
    pub ledger_error: Option<String>,
}

/// Response to a spin of the wheel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinResponse {
    /// Coins won or lost.
    pub prize: i64,
    /// True when the spin won.
    pub win: bool,
    /// Updated balance when the ledger answered.
    pub balance: Option<BalanceUpdate>,
    /// Ledger failure, surfaced instead of retried.
    pub ledger_error: Option<String>,
}

/// JSON error body for non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message.
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

fn session_error(err: SessionError) -> ApiError {
    let status = match err {
        SessionError::NotFound => StatusCode::NOT_FOUND,
        SessionError::AlreadyExists | SessionError::Turn(_) => StatusCode::CONFLICT,
    };
    api_error(status, err.to_string())
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(create_session).get(list_sessions))
        .route("/sessions/{id}", get(get_board))
        .route("/sessions/{id}/moves", post(make_move))
        .route("/spin", post(spin_wheel))
        .with_state(state)
}

/// Runs the HTTP server until shutdown.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let reporter = config.report_url().map(OutcomeReporter::new);
    if reporter.is_none() {
        info!("No ledger endpoint configured, game results will not be reported");
    }

    let state = AppState {
        sessions: SessionManager::new(),
        reporter,
    };

    let app = router(state).layer(tower::ServiceBuilder::new().map_request(
        |req: axum::http::Request<axum::body::Body>| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        },
    ));

    let listener =
        tokio::net::TcpListener::bind((config.host().to_string(), config.port())).await?;
    info!(
        "Server ready at http://{}:{}/",
        config.host(),
        config.port()
    );
    axum::serve(listener, app).await?;

    Ok(())
}

#[instrument(skip(state, req))]
async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), ApiError> {
    let session_id = state
        .sessions
        .create_session(req.session_id)
        .map_err(session_error)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse { session_id }),
    ))
}

#[instrument(skip(state))]
async fn list_sessions(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.sessions.list_sessions())
}

#[instrument(skip(state))]
async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BoardView>, ApiError> {
    let session = state
        .sessions
        .get_session(&id)
        .ok_or_else(|| session_error(SessionError::NotFound))?;

    Ok(Json(BoardView {
        session_id: session.id.clone(),
        board: session.game.board().clone(),
        status: session.game.status(),
        moves: session.game.history().len(),
        display: session.game.board().display(),
    }))
}

#[instrument(skip(state, req), fields(session_id = %id, position = req.position))]
async fn make_move(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let pos = Position::from_index(req.position).ok_or_else(|| {
        api_error(
            StatusCode::BAD_REQUEST,
            format!("Position out of range: {}", req.position),
        )
    })?;

    let (report, finished) = state
        .sessions
        .play_turn(&id, pos)
        .map_err(session_error)?;

    let mut balance = None;
    let mut ledger_error = None;
    if let Some(result) = finished {
        (balance, ledger_error) =
            report_outcome(state.reporter.as_ref(), "tictactoe", result.player_won).await;
    }

    Ok(Json(MoveResponse {
        player_move: report.player_move,
        engine_reply: report.engine_reply,
        status: report.status,
        board: report.board,
        balance,
        ledger_error,
    }))
}

#[instrument(skip(state))]
async fn spin_wheel(State(state): State<AppState>) -> Json<SpinResponse> {
    let SpinResult { prize, win } = spin::spin(&mut rand::thread_rng());
    let (balance, ledger_error) = report_outcome(state.reporter.as_ref(), "spin", win).await;

    Json(SpinResponse {
        prize,
        win,
        balance,
        ledger_error,
    })
}

/// Reports a finished game, mapping failure to a response field.
async fn report_outcome(
    reporter: Option<&OutcomeReporter>,
    game: &str,
    win: bool,
) -> (Option<BalanceUpdate>, Option<String>) {
    let Some(reporter) = reporter else {
        return (None, None);
    };

    match reporter.report(game, win).await {
        Ok(update) => (Some(update), None),
        Err(e) => {
            warn!(game, win, error = %e, "Failed to report game result");
            (None, Some(e.to_string()))
        }
    }
}
