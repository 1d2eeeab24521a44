//! Domain model for bot runtime metrics from the `GET {base}vars` endpoint.

use serde::{Deserialize, Serialize};

/// Runtime metrics reported by the bot.
///
/// Returned by the `vars` endpoint. All three fields are required; a body
/// missing any of them (or carrying the wrong types) fails validation and
/// the poller substitutes [`Metrics::unavailable`]. Unknown fields are
/// ignored.
///
/// `PartialEq` is deliberately not derived: the sentinel uses NaN, which
/// never compares equal to itself. Use [`Metrics::is_unavailable`] to test
/// for the placeholder.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Metrics {
    /// Gateway latency in seconds. Expected non-negative, not enforced.
    pub latency: f64,
    /// Identifiers of the servers the bot is connected to. May be empty.
    pub servers: Vec<i64>,
    /// Resident memory in megabytes.
    pub memory_used: f64,
}

impl Metrics {
    /// The sentinel record published when the `vars` endpoint cannot be
    /// read or its body fails validation.
    ///
    /// Consumers must treat NaN as "no data", never as a numeric value.
    pub fn unavailable() -> Self {
        Self {
            latency: f64::NAN,
            servers: Vec::new(),
            memory_used: f64::NAN,
        }
    }

    /// Returns `true` if this record is the no-data sentinel.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.latency.is_nan() && self.memory_used.is_nan() && self.servers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_payload() {
        let metrics: Metrics = serde_json::from_str(
            r#"{"latency": 0.132, "servers": [101, 102, 103], "memory_used": 256.5}"#,
        )
        .unwrap();
        assert_eq!(metrics.latency, 0.132);
        assert_eq!(metrics.servers, vec![101, 102, 103]);
        assert_eq!(metrics.memory_used, 256.5);
        assert!(!metrics.is_unavailable());
    }

    #[test]
    fn test_empty_server_list_is_valid() {
        let metrics: Metrics =
            serde_json::from_str(r#"{"latency": 0.1, "servers": [], "memory_used": 12.0}"#)
                .unwrap();
        assert!(metrics.servers.is_empty());
        assert!(!metrics.is_unavailable());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        for body in [
            r#"{"servers": [1], "memory_used": 12.0}"#,
            r#"{"latency": 0.1, "memory_used": 12.0}"#,
            r#"{"latency": 0.1, "servers": [1]}"#,
        ] {
            assert!(
                serde_json::from_str::<Metrics>(body).is_err(),
                "body should fail validation: {}",
                body
            );
        }
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<Metrics>(
            r#"{"latency": "fast", "servers": [], "memory_used": 12.0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let metrics: Metrics = serde_json::from_str(
            r#"{"latency": 0.1, "servers": [], "memory_used": 12.0, "shards": 2}"#,
        )
        .unwrap();
        assert_eq!(metrics.latency, 0.1);
    }

    #[test]
    fn test_unavailable_sentinel_shape() {
        let sentinel = Metrics::unavailable();
        assert!(sentinel.latency.is_nan());
        assert!(sentinel.memory_used.is_nan());
        assert!(sentinel.servers.is_empty());
        assert!(sentinel.is_unavailable());
    }

    #[test]
    fn test_zero_valued_metrics_are_not_the_sentinel() {
        let metrics: Metrics =
            serde_json::from_str(r#"{"latency": 0.0, "servers": [], "memory_used": 0.0}"#)
                .unwrap();
        assert!(!metrics.is_unavailable());
    }
}
