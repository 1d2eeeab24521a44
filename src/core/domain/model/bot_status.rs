//! Domain model for the bot run state from the `GET {base}` endpoint.

use serde::{Deserialize, Serialize};

/// Sentinel status reported while the bot is unreachable or the status
/// payload fails validation.
pub const UNKNOWN_STATUS: &str = "unknown";

/// The bot's current run state.
///
/// Returned by the base endpoint as `{ "status": string }`. The string is
/// free-form and short ("running", "stopped", ...); the client does not
/// interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BotStatus {
    /// Free-form short string describing the bot state.
    pub status: String,
}

impl BotStatus {
    /// The placeholder used when the status endpoint cannot be read.
    pub fn unknown() -> Self {
        Self {
            status: UNKNOWN_STATUS.to_string(),
        }
    }

    /// Returns `true` if this is the unreachable-bot placeholder.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.status == UNKNOWN_STATUS
    }
}
