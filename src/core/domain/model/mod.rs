mod bot_status;
mod log_blob;
mod metrics;
mod metrics_window;
mod poll_result;

pub use bot_status::{BotStatus, UNKNOWN_STATUS};
pub use log_blob::LogBlob;
pub use metrics::Metrics;
pub use metrics_window::MetricsWindow;
pub use poll_result::PollResult;
