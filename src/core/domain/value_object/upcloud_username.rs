use crate::core::domain::error::{UpcloudResult, ValidationError};

/// A validated UpCloud API username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcloudUsername(String);

impl UpcloudUsername {
    /// Creates a new validated username.
    pub fn new(username: impl Into<String>) -> UpcloudResult<Self> {
        let username = username.into();
        validate_username(&username)?;
        Ok(Self(username))
    }

    /// Creates a new username without validation.
    #[allow(unused)]
    pub(crate) fn new_unchecked(username: String) -> Self {
        Self(username)
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates an API username.
///
/// The username ends up on the left side of a `user:password` Basic
/// credential, so it may not contain a colon.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
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
    if username.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::Format(
            "Username cannot contain whitespace or control characters".to_string(),
        ));
    }
    Ok(())
}
