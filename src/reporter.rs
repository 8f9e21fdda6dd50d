//! Client for the external balance ledger.
//!
//! Finished games are reported to an HTTP endpoint owned by another
//! service; it decides payouts and returns the updated balance. There
//! is no retry policy: a failed report is surfaced to the caller and
//! logged, never repeated.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Body POSTed to the ledger for each finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameReport {
    /// Game identifier, e.g. "tictactoe" or "spin".
    pub game: String,
    /// True when the player won.
    pub win: bool,
}

/// Ledger response: the player's updated account.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceUpdate {
    /// Coin balance after the payout.
    pub balance: f64,
    /// Experience points after the game.
    pub exp: u64,
    /// Player level after the game.
    pub level: u32,
}

/// Errors from ledger reporting.
#[derive(Debug, Display, Error, From)]
pub enum ReportError {
    /// The request itself failed (connect, timeout, decode).
    #[display("Ledger request failed: {_0}")]
    #[from]
    Http(reqwest::Error),
    /// The ledger answered with a non-success status.
    #[display("Ledger returned status {_0}")]
    Status(#[error(not(source))] u16),
}

/// Reports finished games to the ledger endpoint.
#[derive(Debug, Clone)]
pub struct OutcomeReporter {
    client: reqwest::Client,
    endpoint: String,
}

impl OutcomeReporter {
    /// Creates a reporter for the given endpoint URL.
    #[instrument]
    pub fn new(endpoint: impl Into<String> + std::fmt::Debug) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Reports one finished game and returns the updated balance.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent, the ledger answers with a
    /// non-success status, or the response body does not decode.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn report(&self, game: &str, win: bool) -> Result<BalanceUpdate, ReportError> {
        let body = GameReport {
            game: game.to_string(),
            win,
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, game, win, "Ledger rejected game report");
            return Err(ReportError::Status(status.as_u16()));
        }

        let update: BalanceUpdate = response.json().await?;
        info!(
            game,
            win,
            balance = update.balance,
            exp = update.exp,
            level = update.level,
            "Ledger acknowledged game report"
        );
        Ok(update)
    }
}
