use crate::core::domain::error::{UpcloudResult, ValidationError};
use serde::Serialize;

/// Key type prefixes accepted by the API's `ssh_key` field.
const KEY_PREFIXES: [&str; 5] = [
    "ssh-rsa ",
    "ssh-ed25519 ",
    "ssh-dss ",
    "ecdsa-sha2-",
    "sk-",
];

/// An OpenSSH-formatted public key (`<type> <base64> [comment]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SshPublicKey(String);

impl SshPublicKey {
    /// Creates a new validated public key. Surrounding whitespace is trimmed.
    pub fn new(key: impl Into<String>) -> UpcloudResult<Self> {
        let key = key.into().trim().to_string();
        validate_ssh_public_key(&key)?;
        Ok(Self(key))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub(crate) fn validate_ssh_public_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::Field {
            field: "ssh_key".to_string(),
            message: "SSH public key cannot be empty".to_string(),
        });
    }
    if key.contains('\n') || key.contains('\r') {
        return Err(ValidationError::Format(
            "SSH public key must be a single line".to_string(),
        ));
    }
    if !KEY_PREFIXES.iter().any(|p| key.starts_with(p)) {
        return Err(ValidationError::Format(
            "SSH public key has an unknown key type".to_string(),
        ));
    }
    Ok(())
}
