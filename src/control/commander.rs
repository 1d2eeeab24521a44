use std::fmt;

use reqwest::StatusCode;
use tracing::info;

use crate::core::domain::error::DashboardResult;
use crate::core::domain::value_object::{BaseUrl, Credentials};
use crate::core::infrastructure::api_client::ApiClient;

/// A lifecycle instruction for the remote bot.
///
/// The stable identifiers map one-to-one onto the POST path segments the
/// control endpoint understands. Keeping this an enum (rather than
/// building paths from widget names at runtime) is what lets a UI wire a
/// control to its handler at initialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlInstruction {
    /// Start the bot.
    Launch,
    /// Stop the bot.
    Terminate,
    /// Stop and immediately start the bot again.
    Restart,
}

impl ControlInstruction {
    /// The POST path segment for this instruction.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlInstruction::Launch => "launch",
            ControlInstruction::Terminate => "terminate",
            ControlInstruction::Restart => "restart",
        }
    }
}

impl fmt::Display for ControlInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-shot submitter of control instructions.
///
/// Each submission is a single POST to `{base}{instruction}` carrying the
/// static `Authorization: user:pass` header. The raw status code comes
/// back unmodified and uninterpreted — deciding what a 401 or a 503 means
/// is the caller's job. There is no retry, no queue, and no
/// synchronization between concurrent submissions.
///
/// # Examples
///
/// ```no_run
/// use botdeck::{BaseUrl, Commander, ControlInstruction, Credentials};
///
/// #[tokio::main]
/// async fn main() -> botdeck::DashboardResult<()> {
///     let commander = Commander::new(
///         BaseUrl::new("http://localhost:5000/")?,
///         Credentials::new("operator", "hunter2")?,
///     )?;
///
///     let status = commander.submit(ControlInstruction::Launch).await?;
///     assert!(status.is_success());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Commander {
    api: ApiClient,
    credentials: Credentials,
}

impl Commander {
    /// Creates a commander for the given base URL and credential pair.
    ///
    /// # Errors
    /// Returns `DashboardError::Connection` if the HTTP client cannot be
    /// built.
    pub fn new(base_url: BaseUrl, credentials: Credentials) -> DashboardResult<Self> {
        Ok(Self {
            api: ApiClient::new(base_url)?,
            credentials,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_api(api: ApiClient, credentials: Credentials) -> Self {
        Self { api, credentials }
    }

    /// Submits one of the conventional lifecycle instructions.
    ///
    /// # Errors
    /// Returns `DashboardError::Connection` only on a transport failure;
    /// any HTTP status code, success or not, is an `Ok`.
    pub async fn submit(&self, instruction: ControlInstruction) -> DashboardResult<StatusCode> {
        self.submit_raw(instruction.as_str()).await
    }

    /// Submits an arbitrary instruction segment.
    ///
    /// The control endpoint does not enforce the conventional set
    /// server-side; this is the escape hatch for instructions it may grow
    /// to understand.
    ///
    /// # Errors
    /// Returns `DashboardError::Connection` only on a transport failure.
    pub async fn submit_raw(&self, instruction: &str) -> DashboardResult<StatusCode> {
        let status = self
            .api
            .post_instruction(instruction, &self.credentials)
            .await?;
        info!(%instruction, %status, "control instruction submitted");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::error::DashboardError;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_commander(uri: &str) -> Commander {
        Commander::from_api(
            ApiClient::new(BaseUrl::new_unchecked(uri)).unwrap(),
            Credentials::new_unchecked("operator", "hunter2"),
        )
    }

    #[tokio::test]
    async fn test_submit_posts_once_with_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/launch"))
            .and(header("Authorization", "operator:hunter2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let commander = test_commander(&mock_server.uri());
        let status = commander.submit(ControlInstruction::Launch).await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_submit_surfaces_failure_codes_unmodified() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/terminate"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let commander = test_commander(&mock_server.uri());
        let status = commander
            .submit(ControlInstruction::Terminate)
            .await
            .unwrap();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_submit_raw_reaches_arbitrary_segment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/reload-config"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;

        let commander = test_commander(&mock_server.uri());
        let status = commander.submit_raw("reload-config").await.unwrap();
        assert_eq!(status, StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_error() {
        // A non-pooled server: `MockServer::start()` hands out a pooled
        // instance whose listener outlives the drop, so the port would
        // still answer (with a 404) instead of refusing the connection.
        let mock_server = MockServer::builder().start().await;
        let uri = mock_server.uri();
        drop(mock_server);

        let commander = test_commander(&uri);
        let result = commander.submit(ControlInstruction::Restart).await;
        assert!(matches!(result, Err(DashboardError::Connection(_))));
    }

    #[test]
    fn test_instruction_path_segments() {
        assert_eq!(ControlInstruction::Launch.as_str(), "launch");
        assert_eq!(ControlInstruction::Terminate.as_str(), "terminate");
        assert_eq!(ControlInstruction::Restart.as_str(), "restart");
        assert_eq!(ControlInstruction::Restart.to_string(), "restart");
    }
}
