use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::core::domain::error::DashboardResult;
use crate::core::domain::model::{BotStatus, LogBlob, Metrics, PollResult};
use crate::core::domain::value_object::BaseUrl;
use crate::core::infrastructure::api_client::ApiClient;

/// The fixed cadence between poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Periodic poller for the three read-only endpoints.
///
/// Each cycle issues three sequential GETs — `{base}` for the run state,
/// `{base}vars` for metrics, `{base}log` for recent log text — and
/// publishes one immutable [`PollResult`] into a single-slot watch
/// channel. Every failure is absorbed here: a sub-field whose endpoint is
/// unreachable, returns a non-2xx code, or fails schema validation falls
/// back to its documented sentinel while the other two keep their data.
/// The next tick is the only retry mechanism; the cadence never changes.
///
/// # Examples
///
/// ```no_run
/// use botdeck::{BaseUrl, Poller};
///
/// #[tokio::main]
/// async fn main() -> botdeck::DashboardResult<()> {
///     let poller = Poller::new(BaseUrl::new("http://localhost:5000/")?)?;
///     let handle = poller.start();
///     let mut results = handle.subscribe();
///
///     results.changed().await.ok();
///     println!("bot is {}", results.borrow().status.status);
///
///     handle.stop().await;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Poller {
    api: ApiClient,
    interval: Duration,
}

impl Poller {
    /// Creates a poller for the given base URL with the default 5 second
    /// cadence.
    ///
    /// # Errors
    /// Returns `DashboardError::Connection` if the HTTP client cannot be
    /// built.
    pub fn new(base_url: BaseUrl) -> DashboardResult<Self> {
        Ok(Self {
            api: ApiClient::new(base_url)?,
            interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Overrides the poll cadence. Mainly useful in tests.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Begins the periodic cycle on a background task and hands back the
    /// consumer's end of it.
    ///
    /// Consuming `self` makes starting the same poller twice
    /// unrepresentable. The first cycle runs immediately; subscribers see
    /// [`PollResult::unavailable`] until it completes.
    pub fn start(self) -> PollerHandle {
        let (result_tx, result_rx) = watch::channel(PollResult::unavailable());
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let Poller { api, interval } = self;

        let task = tokio::spawn(async move {
            info!(base_url = %api.base_url().as_str(), interval_secs = interval.as_secs_f64(), "poll loop started");

            loop {
                if *shutdown_rx.borrow() {
                    break;
                }

                let result = poll_once(&api).await;
                if result_tx.send(result).is_err() {
                    // Every consumer is gone; nothing left to publish to.
                    break;
                }

                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = shutdown_rx.changed() => break,
                }
            }

            info!("poll loop stopped");
        });

        PollerHandle {
            results: result_rx,
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Runs one poll cycle: three sequential GETs with per-field fallback.
pub(crate) async fn poll_once(api: &ApiClient) -> PollResult {
    let status = match api.fetch_json::<BotStatus>("").await {
        Ok(status) => status,
        Err(e) => {
            warn!(error = %e, "status endpoint unavailable, reporting unknown");
            BotStatus::unknown()
        }
    };

    let vars = match api.fetch_json::<Metrics>("vars").await {
        Ok(vars) => vars,
        Err(e) => {
            warn!(error = %e, "vars endpoint unavailable, substituting sentinel metrics");
            Metrics::unavailable()
        }
    };

    let log = match api.fetch_json::<LogBlob>("log").await {
        Ok(log) => log,
        Err(e) => {
            warn!(error = %e, "log endpoint unavailable, substituting empty log");
            LogBlob::default()
        }
    };

    PollResult { status, log, vars }
}

/// The consumer's end of a running poll loop.
///
/// Holds the result mailbox and the shutdown signal. Dropping the handle
/// without calling [`PollerHandle::stop`] also ends the loop: the task
/// notices the closed shutdown channel at its next sleep.
#[derive(Debug)]
pub struct PollerHandle {
    results: watch::Receiver<PollResult>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Returns a receiver over published results.
    ///
    /// The channel is a last-value-wins mailbox: a consumer that falls
    /// behind sees only the most recent result, which is the intended
    /// semantics for a dashboard. The receiver is safe to await from any
    /// task or thread; the poller never touches consumer state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PollResult> {
        self.results.clone()
    }

    /// Returns a copy of the most recently published result.
    #[must_use]
    pub fn latest(&self) -> PollResult {
        self.results.borrow().clone()
    }

    /// Requests a cooperative stop and waits for the loop to finish.
    ///
    /// The signal is checked between cycles, not mid-request: a cycle
    /// already in flight is allowed to complete and publish once more,
    /// after which no further result is ever published.
    pub async fn stop(self) {
        // Send can only fail if the task already exited.
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_healthy_endpoints(mock_server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "running"})),
            )
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/vars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latency": 0.2,
                "servers": [7, 8],
                "memory_used": 128.0
            })))
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/log"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"content": "ready"})),
            )
            .mount(mock_server)
            .await;
    }

    fn test_api(uri: &str) -> ApiClient {
        ApiClient::new(BaseUrl::new_unchecked(uri)).unwrap()
    }

    #[tokio::test]
    async fn test_poll_once_all_endpoints_healthy() {
        let mock_server = MockServer::start().await;
        mount_healthy_endpoints(&mock_server).await;

        let result = poll_once(&test_api(&mock_server.uri())).await;
        assert_eq!(result.status.status, "running");
        assert_eq!(result.vars.servers, vec![7, 8]);
        assert_eq!(result.log.content, "ready");
    }

    #[tokio::test]
    async fn test_single_endpoint_failure_is_isolated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "running"})),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/vars"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/log"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"content": "ready"})),
            )
            .mount(&mock_server)
            .await;

        let result = poll_once(&test_api(&mock_server.uri())).await;
        assert_eq!(result.status.status, "running");
        assert!(result.vars.is_unavailable());
        assert_eq!(result.log.content, "ready");
    }

    #[tokio::test]
    async fn test_invalid_metrics_payload_becomes_sentinel() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "running"})),
            )
            .mount(&mock_server)
            .await;

        // Missing memory_used: schema validation must reject it.
        Mock::given(method("GET"))
            .and(path("/vars"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"latency": 0.2, "servers": [7]})),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/log"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"content": "ready"})),
            )
            .mount(&mock_server)
            .await;

        let result = poll_once(&test_api(&mock_server.uri())).await;
        assert!(result.vars.latency.is_nan());
        assert!(result.vars.memory_used.is_nan());
        assert!(result.vars.servers.is_empty());
        assert_eq!(result.status.status, "running");
    }

    #[tokio::test]
    async fn test_unreachable_host_yields_full_placeholder() {
        let mock_server = MockServer::start().await;
        let uri = mock_server.uri();
        drop(mock_server);

        let result = poll_once(&test_api(&uri)).await;
        assert!(result.is_unavailable());
    }

    #[tokio::test]
    async fn test_consecutive_cycles_produce_independent_results() {
        let mock_server = MockServer::start().await;
        mount_healthy_endpoints(&mock_server).await;
        let api = test_api(&mock_server.uri());

        let mut first = poll_once(&api).await;
        let second = poll_once(&api).await;

        first.vars.servers.push(999);
        first.status.status = "mutated".to_string();

        assert_eq!(second.vars.servers, vec![7, 8]);
        assert_eq!(second.status.status, "running");
    }

    #[tokio::test]
    async fn test_loop_publishes_and_stops() {
        let mock_server = MockServer::start().await;
        mount_healthy_endpoints(&mock_server).await;

        let poller = Poller {
            api: test_api(&mock_server.uri()),
            interval: Duration::from_millis(20),
        };
        let handle = poller.start();
        let mut results = handle.subscribe();

        // Initial value is the placeholder.
        assert!(results.borrow().is_unavailable());

        results.changed().await.unwrap();
        assert_eq!(results.borrow_and_update().status.status, "running");

        handle.stop().await;

        // The sender is gone once the task has joined, so nothing can be
        // published after stop. Drain whatever the final in-flight cycle
        // may have left in the slot, then confirm the channel is closed.
        let _ = results.borrow_and_update();
        assert!(results.changed().await.is_err());
    }

    #[tokio::test]
    async fn test_loop_keeps_running_through_failures() {
        let mock_server = MockServer::start().await;
        // No mocks mounted: every GET answers 404.

        let poller = Poller {
            api: test_api(&mock_server.uri()),
            interval: Duration::from_millis(20),
        };
        let handle = poller.start();
        let mut results = handle.subscribe();

        for _ in 0..3 {
            results.changed().await.unwrap();
            assert!(results.borrow_and_update().is_unavailable());
        }

        handle.stop().await;
    }
}
