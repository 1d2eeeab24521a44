//! botdeck — a typed, async client for a remote bot-control HTTP API.
//!
//! The crate has two moving parts with a one-directional relationship:
//!
//! * [`Poller`] polls three read-only endpoints (status, metrics, log) on
//!   a fixed 5 second cadence, validates every body against its schema,
//!   and publishes an immutable [`PollResult`] per cycle into a
//!   single-slot mailbox. Failures never escape it: unreachable or
//!   malformed endpoints degrade to well-defined sentinel values.
//! * [`Commander`] submits one lifecycle instruction (`launch`,
//!   `terminate`, `restart`) per call and hands back the raw status code.
//!
//! A presentation layer owns both explicitly — there is no global state —
//! and renders whatever the mailbox last held.

mod config;
mod control;
mod core;
mod polling;

pub use crate::config::Config;
pub use crate::control::{Commander, ControlInstruction};
pub use crate::core::domain::error::{DashboardError, DashboardResult, ValidationError};
pub use crate::core::domain::model::{
    BotStatus, LogBlob, Metrics, MetricsWindow, PollResult, UNKNOWN_STATUS,
};
pub use crate::core::domain::value_object::{BaseUrl, Credentials};
pub use crate::polling::{DEFAULT_POLL_INTERVAL, Poller, PollerHandle};

use std::time::Duration;

/// A client for one bot-control dashboard session.
///
/// Bundles the polling side and the control side behind a single builder
/// so an application configures the base URL and credentials exactly once.
///
/// # Examples
///
/// ```no_run
/// use botdeck::{ControlInstruction, DashboardClient, DashboardResult};
///
/// #[tokio::main]
/// async fn main() -> DashboardResult<()> {
///     let client = DashboardClient::builder()
///         .base_url("http://localhost:5000/")
///         .credentials("operator", "hunter2")
///         .build()?;
///
///     let handle = client.start_polling()?;
///     let mut results = handle.subscribe();
///     results.changed().await.ok();
///     println!("bot is {}", results.borrow().status.status);
///
///     let status = client.commander().submit(ControlInstruction::Restart).await?;
///     println!("restart answered {}", status);
///
///     handle.stop().await;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct DashboardClient {
    base_url: BaseUrl,
    interval: Duration,
    commander: Commander,
}

/// Builder for [`DashboardClient`] configuration.
#[derive(Debug, Default)]
pub struct DashboardClientBuilder {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    interval: Option<Duration>,
}

impl DashboardClientBuilder {
    /// Sets the API base URL. Validated at [`build`](Self::build).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the control-endpoint credential pair. Validated at
    /// [`build`](Self::build).
    #[must_use]
    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Overrides the poll cadence (default: 5 seconds).
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Validates the collected values and builds the client.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Validation` if the base URL or the
    /// credentials are missing or invalid, and
    /// `DashboardError::Connection` if the HTTP client cannot be built.
    pub fn build(self) -> DashboardResult<DashboardClient> {
        let base_url = BaseUrl::new(self.base_url.ok_or_else(|| {
            DashboardError::from(ValidationError::Field {
                field: "base_url".to_string(),
                message: "Base URL is required".to_string(),
            })
        })?)?;

        let credentials = Credentials::new(
            self.username.ok_or_else(|| {
                DashboardError::from(ValidationError::Field {
                    field: "username".to_string(),
                    message: "Credentials are required".to_string(),
                })
            })?,
            self.password.unwrap_or_default(),
        )?;

        let interval = self.interval.unwrap_or(DEFAULT_POLL_INTERVAL);
        let commander = Commander::new(base_url.clone(), credentials)?;

        Ok(DashboardClient {
            base_url,
            interval,
            commander,
        })
    }
}

impl DashboardClient {
    /// Creates a new builder for client configuration.
    #[must_use]
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    /// Builds a client from environment-sourced [`Config`].
    ///
    /// # Errors
    ///
    /// Propagates [`Config::from_env`] errors, plus
    /// `DashboardError::Connection` if the HTTP client cannot be built.
    pub fn from_env() -> DashboardResult<Self> {
        Self::from_config(Config::from_env()?)
    }

    /// Builds a client from an already-validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Connection` if the HTTP client cannot be
    /// built.
    pub fn from_config(config: Config) -> DashboardResult<Self> {
        let base_url = config.base_url().clone();
        let commander = Commander::new(base_url.clone(), config.credentials().clone())?;
        Ok(Self {
            base_url,
            interval: DEFAULT_POLL_INTERVAL,
            commander,
        })
    }

    /// Starts a fresh background poll loop and returns its handle.
    ///
    /// Each call spawns an independent loop with its own mailbox; the
    /// returned [`PollerHandle`] owns it and stops it.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Connection` if the HTTP client cannot be
    /// built.
    pub fn start_polling(&self) -> DashboardResult<PollerHandle> {
        let poller = Poller::new(self.base_url.clone())?.with_interval(self.interval);
        Ok(poller.start())
    }

    /// The control-instruction submitter.
    #[must_use]
    pub fn commander(&self) -> &Commander {
        &self.commander
    }

    /// The configured API base URL.
    #[must_use]
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}

#[cfg(test)]
mod tests;
