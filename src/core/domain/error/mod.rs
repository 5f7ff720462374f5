use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for UpCloud operations.
///
/// This enum represents all possible errors that can occur while talking
/// to the UpCloud API, including transport, authentication, vendor-side
/// and validation failures.
#[derive(Error, Debug)]
pub enum UpcloudError {
    /// Represents errors that occur while reaching the API
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the request
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents authentication failures (HTTP 401)
    ///
    /// # Fields
    /// * `0` - The vendor's error message
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Any other non-2xx answer from the API
    ///
    /// # Fields
    /// * `status` - The HTTP status returned by the API
    /// * `body` - The vendor's error body, unmodified
    #[error("API error ({status}): {body}")]
    Api {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// The API answered with a payload that does not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A request body could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation { source: ValidationError },
}

impl UpcloudError {
    /// Returns the vendor `error_code` carried by an [`UpcloudError::Api`] body, if any.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            UpcloudError::Api { body, .. } => body
                .get("error")
                .and_then(|e| e.get("error_code"))
                .and_then(|c| c.as_str()),
            _ => None,
        }
    }
}

impl From<ValidationError> for UpcloudError {
    fn from(error: ValidationError) -> Self {
        UpcloudError::Validation { source: error }
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

/// Type alias for Results that may fail with an UpcloudError
pub type UpcloudResult<T> = Result<T, UpcloudError>;
