use std::fmt;

use crate::core::domain::error::{DashboardResult, ValidationError};

/// The static credential pair sent with control submissions.
///
/// Rendered as `Authorization: {username}:{password}`, matching what the
/// control endpoint expects. The `Debug` implementation redacts the
/// password so credentials never leak into logs.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates a new validated credential pair.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Validation` if either field is empty or
    /// the username contains a `:` (which would corrupt the header).
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> DashboardResult<Self> {
        let username = username.into();
        let password = password.into();
        validate_credentials(&username, &password)?;
        Ok(Self { username, password })
    }

    /// Creates a credential pair without validation.
    #[cfg(test)]
    pub(crate) fn new_unchecked(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Renders the value of the `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validates a credential pair.
pub(crate) fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    if username.contains(':') {
        return Err(ValidationError::Format(
            "Username cannot contain ':'".to_string(),
        ));
    }
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    Ok(())
}
