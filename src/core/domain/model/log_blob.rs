//! Domain model for recent log output from the `GET {base}log` endpoint.

use serde::{Deserialize, Serialize};

/// An opaque blob of recent log text.
///
/// Returned by the `log` endpoint as `{ "content": string }`. The content
/// is rendered verbatim by consumers; the client never parses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogBlob {
    /// Arbitrary log text. Empty when the endpoint cannot be read.
    pub content: String,
}

impl LogBlob {
    /// Returns `true` if there is no log text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
