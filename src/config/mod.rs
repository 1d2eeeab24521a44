//! Environment-sourced process configuration.
//!
//! The dashboard is configured entirely through environment variables,
//! typically loaded from a `.env` file by the embedding application:
//!
//! * `APPLICATION_URL` — base URL of the bot-control API
//! * `app_username` / `app_password` — control-endpoint credentials
//!
//! There are no CLI flags and no state persisted to disk.

use std::env;

use crate::core::domain::error::{DashboardError, DashboardResult};
use crate::core::domain::value_object::{BaseUrl, Credentials};

/// Environment variable naming the API base URL.
pub const APPLICATION_URL_VAR: &str = "APPLICATION_URL";
/// Environment variable naming the control-endpoint username.
pub const USERNAME_VAR: &str = "app_username";
/// Environment variable naming the control-endpoint password.
pub const PASSWORD_VAR: &str = "app_password";

/// Validated configuration for one dashboard client.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: BaseUrl,
    credentials: Credentials,
}

impl Config {
    /// Builds a config from explicit values.
    #[must_use]
    pub fn new(base_url: BaseUrl, credentials: Credentials) -> Self {
        Self {
            base_url,
            credentials,
        }
    }

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Config` naming the first missing
    /// variable, or `DashboardError::Validation` if a present value fails
    /// validation.
    pub fn from_env() -> DashboardResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests inject their own lookup instead
    /// of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> DashboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = require(&lookup, APPLICATION_URL_VAR)?;
        let username = require(&lookup, USERNAME_VAR)?;
        let password = require(&lookup, PASSWORD_VAR)?;

        Ok(Self {
            base_url: BaseUrl::new(url)?,
            credentials: Credentials::new(username, password)?,
        })
    }

    /// The configured API base URL.
    #[must_use]
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// The configured control-endpoint credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

fn require<F>(lookup: &F, name: &str) -> DashboardResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| DashboardError::Config(format!("{} is not set", name)))
}
