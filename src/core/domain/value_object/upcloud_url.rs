use crate::core::domain::error::{UpcloudResult, ValidationError};
use url::Url;

/// Default public API host.
pub const DEFAULT_API_URL: &str = "https://api.upcloud.com/";

/// A validated base URL for the UpCloud API.
///
/// The stored URL always ends with `/` so API paths can be appended to it
/// without losing the last path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcloudUrl(Url);

impl UpcloudUrl {
    /// Parses and validates a base URL.
    pub fn new(url: &str) -> UpcloudResult<Self> {
        Ok(Self(validate_url(url)?))
    }

    /// Creates a URL without validation.
    ///
    /// Panics if `url` does not parse; only meant for fixed, known-good input.
    #[allow(unused)]
    pub(crate) fn new_unchecked(url: String) -> Self {
        let mut url = url;
        if !url.ends_with('/') {
            url.push('/');
        }
        Self(Url::parse(&url).expect("invalid unchecked URL"))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Builds the full endpoint URL for a versioned API path.
    ///
    /// Every segment is percent-encoded on its own, so `/`, `?` and `#` inside
    /// a segment never change which endpoint is addressed.
    pub fn endpoint(&self, api_version: &str, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        // Only fails for cannot-be-a-base URLs, which `validate_url` rejects.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .push(api_version.trim_matches('/'))
                .extend(segments);
        }
        url
    }
}

impl Default for UpcloudUrl {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_API_URL.to_string())
    }
}

/// Validates a base URL and normalizes it to end with `/`.
pub(crate) fn validate_url(url: &str) -> Result<Url, ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    let mut parsed =
        Url::parse(url).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if parsed.scheme() != "https" && parsed.scheme() != "http" {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be one of: https, http",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::Format("URL has no host".to_string()));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "Base URL cannot carry a query or fragment".to_string(),
        ));
    }

    if !parsed.path().ends_with('/') {
        let path = format!("{}/", parsed.path());
        parsed.set_path(&path);
    }
    Ok(parsed)
}
