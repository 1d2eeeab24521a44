//! The aggregate published by the poller after each poll cycle.

use serde::{Deserialize, Serialize};

use crate::core::domain::model::bot_status::BotStatus;
use crate::core::domain::model::log_blob::LogBlob;
use crate::core::domain::model::metrics::Metrics;

/// One complete poll cycle's worth of data.
///
/// Built fresh on every tick and never mutated afterwards; the previous
/// result is simply replaced. Each sub-field independently holds either
/// fully validated data or its documented fallback:
///
/// * `status` — [`BotStatus::unknown`] when unobtainable
/// * `log` — empty [`LogBlob`] when unobtainable
/// * `vars` — [`Metrics::unavailable`] when unobtainable
///
/// One failing endpoint never blanks the other two.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollResult {
    /// The bot's run state.
    pub status: BotStatus,
    /// Recent log output.
    pub log: LogBlob,
    /// Runtime metrics.
    pub vars: Metrics,
}

impl PollResult {
    /// The result published when every endpoint is unobtainable. Also the
    /// initial value seen by a subscriber before the first cycle finishes.
    pub fn unavailable() -> Self {
        Self {
            status: BotStatus::unknown(),
            log: LogBlob::default(),
            vars: Metrics::unavailable(),
        }
    }

    /// Returns `true` if every sub-field is its fallback value.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.status.is_unknown() && self.log.is_empty() && self.vars.is_unavailable()
    }
}
