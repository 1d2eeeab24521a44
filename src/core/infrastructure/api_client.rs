//! Internal HTTP client shared by the poller and the commander.

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::core::domain::error::{DashboardError, DashboardResult, ValidationError};
use crate::core::domain::value_object::{BaseUrl, Credentials};

/// Internal HTTP client that knows the API base URL and performs the two
/// request shapes this API has: typed GETs of JSON payloads, and control
/// POSTs whose raw status code is the whole answer.
///
/// No authentication state is kept here — the read-only endpoints are
/// unauthenticated and control submissions carry a static header built
/// from [`Credentials`] on every call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: BaseUrl,
}

impl ApiClient {
    /// Creates a new `ApiClient` for the given base URL.
    ///
    /// # Errors
    /// Returns `DashboardError::Connection` if the HTTP client cannot be
    /// built.
    pub fn new(base_url: BaseUrl) -> DashboardResult<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| DashboardError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Performs a GET against `{base}{segment}` and parses the body.
    ///
    /// The status code is checked before any parsing is attempted; only a
    /// 2xx body is handed to serde.
    ///
    /// # Type Parameters
    /// - `T`: The expected response type (must implement `DeserializeOwned`).
    ///
    /// # Errors
    /// Returns `DashboardError::Connection` on a transport failure or a
    /// non-success status code, and `DashboardError::Validation` when the
    /// body does not match the schema of `T`.
    pub async fn fetch_json<T>(&self, segment: &str) -> DashboardResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.base_url.join(segment);
        debug!(%url, "requesting");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Connection(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DashboardError::Connection(format!(
                "API error ({}) for {}",
                response.status(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Connection(format!("Failed to read body: {}", e)))?;

        serde_json::from_str::<T>(&body).map_err(|e| {
            DashboardError::from(ValidationError::Format(format!(
                "Response from {} does not match schema: {}",
                url, e
            )))
        })
    }

    /// Performs a POST against `{base}{segment}` carrying the static
    /// `Authorization: user:pass` header, and returns the raw status code.
    ///
    /// The code is surfaced unmodified — a 401 is an `Ok(401)`, not an
    /// error. Only a transport failure is an `Err`.
    pub async fn post_instruction(
        &self,
        segment: &str,
        credentials: &Credentials,
    ) -> DashboardResult<StatusCode> {
        let url = self.base_url.join(segment);
        debug!(%url, "submitting control instruction");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", credentials.authorization_header())
            .send()
            .await
            .map_err(|e| DashboardError::Connection(format!("HTTP request failed: {}", e)))?;

        Ok(response.status())
    }
}
