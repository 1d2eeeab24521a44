use thiserror::Error;

/// The main error type for dashboard client operations.
///
/// This enum represents the failures that can surface to a caller:
/// transport-level failures on control submissions, missing or malformed
/// process configuration, and validation failures during construction.
///
/// Poll-time failures never appear here — the poller absorbs them and
/// publishes sentinel values instead (see `PollResult`).
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Represents errors that occur while talking to the control API
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the request
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents missing or malformed process configuration
    ///
    /// # Fields
    /// * `0` - The name of the offending configuration variable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation { source: ValidationError },
}

impl From<ValidationError> for DashboardError {
    fn from(error: ValidationError) -> Self {
        DashboardError::Validation { source: error }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a DashboardError
pub type DashboardResult<T> = Result<T, DashboardError>;
