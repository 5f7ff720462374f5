use crate::core::domain::error::{UpcloudResult, ValidationError};
use std::fmt;

/// An UpCloud API password (plaintext, kept in memory only).
#[derive(Clone, PartialEq, Eq)]
pub struct UpcloudPassword(String);

impl UpcloudPassword {
    /// Creates a new validated password.
    pub fn new(password: impl Into<String>) -> UpcloudResult<Self> {
        let password = password.into();
        validate_password(&password)?;
        Ok(Self(password))
    }

    /// Creates a new password without validation.
    #[allow(unused)]
    pub(crate) fn new_unchecked(password: String) -> Self {
        Self(password)
    }

    /// Returns the password as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UpcloudPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UpcloudPassword(***)")
    }
}

/// Validates a password.
pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    Ok(())
}
