use url::Url;

use crate::core::domain::error::{DashboardResult, ValidationError};

/// A validated base URL for the bot-control API.
///
/// The URL must parse, use the `http` or `https` scheme, and carry a host.
/// A trailing slash is guaranteed after construction so that endpoint
/// segments (`vars`, `log`, `launch`, ...) join onto it directly, matching
/// the API contract of `{base}{segment}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Validation` if the value is empty, does
    /// not parse as a URL, uses a scheme other than http/https, or has no
    /// host.
    pub fn new(url: impl Into<String>) -> DashboardResult<Self> {
        let mut url = url.into();
        validate_base_url(&url)?;
        if !url.ends_with('/') {
            url.push('/');
        }
        // Checked by validate_base_url above.
        let parsed = Url::parse(&url).map_err(|e| ValidationError::Format(e.to_string()))?;
        Ok(Self(parsed))
    }

    /// Creates a base URL without validation.
    #[cfg(test)]
    pub(crate) fn new_unchecked(url: &str) -> Self {
        let mut url = url.to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        Self(Url::parse(&url).unwrap())
    }

    /// Returns the URL as a string slice, trailing slash included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Appends an endpoint segment to the base, e.g. `vars` or `launch`.
    ///
    /// The empty segment yields the base itself (the status endpoint).
    #[must_use]
    pub fn join(&self, segment: &str) -> String {
        format!("{}{}", self.0, segment.trim_start_matches('/'))
    }
}

/// Validates a base URL candidate.
pub(crate) fn validate_base_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "base_url".to_string(),
            message: "Base URL cannot be empty".to_string(),
        });
    }

    let parsed = Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be http or https",
            parsed.scheme()
        )));
    }

    if parsed.host_str().is_none() {
        return Err(ValidationError::ConstraintViolation(
            "Base URL must include a host".to_string(),
        ));
    }

    Ok(())
}
