//! HTTP Basic credentials for the API.

use crate::core::domain::model::upcloud_connection::UpcloudConnection;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::HeaderValue;

/// Pre-rendered `Authorization` header value for a connection.
///
/// The value is marked sensitive so it is never printed by `reqwest` debug output.
#[derive(Clone)]
pub struct BasicAuth {
    header: HeaderValue,
}

impl BasicAuth {
    /// Renders `Basic base64(user:password)` for the connection's credentials.
    pub fn new(connection: &UpcloudConnection) -> Self {
        let credential = encode(
            connection.username().as_str(),
            connection.password().as_str(),
        );
        // Base64 output and the "Basic " prefix are always visible ASCII.
        let mut header = HeaderValue::from_str(&credential)
            .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
        header.set_sensitive(true);
        Self { header }
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.header
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BasicAuth(***)")
    }
}

fn encode(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", username, password))
    )
}
