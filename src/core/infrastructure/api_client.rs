//! Internal HTTP client that signs every request and classifies API failures.

use crate::{
    auth::basic_auth::BasicAuth,
    config::{ClientConfig, RateLimitConfig},
    core::domain::{
        error::{UpcloudError, UpcloudResult, ValidationError},
        model::upcloud_connection::UpcloudConnection,
    },
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{
    Client, Method, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderValue},
};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, warn};

const APPLICATION_JSON: &str = "application/json";

/// Error body returned by the API on failures.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    error_message: String,
}

/// Internal HTTP client used by [`crate::UpcloudClient`].
///
/// Every request carries the `Authorization: Basic ...` and
/// `Accept: application/json` headers; requests with a body also carry
/// `Content-Type: application/json`. A `401 Unauthorized` answer becomes
/// [`UpcloudError::Authentication`] with the vendor's message, any other
/// non-2xx answer becomes [`UpcloudError::Api`] with the vendor's body.
/// Requests are sent exactly once.
///
/// Paths are given as segments; each segment is percent-encoded on its own.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    connection: Arc<UpcloudConnection>,
    auth: BasicAuth,
    config: Arc<ClientConfig>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Errors
    /// Returns `UpcloudError::Validation` for an invalid configuration and
    /// `UpcloudError::Connection` if the HTTP client cannot be built.
    pub fn new(connection: UpcloudConnection, config: ClientConfig) -> UpcloudResult<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpcloudError::Connection(e.to_string()))?;

        let rate_limiter = config
            .rate_limit
            .map(|rl| build_rate_limiter(&rl))
            .transpose()?;

        Ok(Self {
            http_client,
            auth: BasicAuth::new(&connection),
            connection: Arc::new(connection),
            config: Arc::new(config),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &UpcloudConnection {
        &self.connection
    }

    /// Returns the configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Performs a GET request and parses the JSON answer.
    ///
    /// # Errors
    /// Returns `UpcloudError` if the request fails, the API rejects it,
    /// or the response cannot be parsed into `T`.
    pub async fn get<T>(&self, segments: &[&str]) -> UpcloudResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .execute_request(Method::GET, segments, None::<&()>)
            .await?;
        parse_response(response, segments).await
    }

    /// Performs a POST request with a JSON body and parses the JSON answer.
    ///
    /// # Errors
    /// Returns `UpcloudError` if the request fails, the API rejects it,
    /// or the response cannot be parsed into `T`.
    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> UpcloudResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .execute_request(Method::POST, segments, Some(body))
            .await?;
        parse_response(response, segments).await
    }

    /// Performs a POST request with a JSON body and ignores the answer's content.
    ///
    /// # Errors
    /// Returns `UpcloudError` if the request fails or the API rejects it.
    pub async fn post_discard<B>(&self, segments: &[&str], body: &B) -> UpcloudResult<()>
    where
        B: serde::Serialize,
    {
        self.execute_request(Method::POST, segments, Some(body))
            .await?;
        Ok(())
    }

    /// Sends one request and turns non-2xx answers into errors.
    async fn execute_request<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> UpcloudResult<reqwest::Response>
    where
        B: serde::Serialize,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self
            .connection
            .url()
            .endpoint(&self.config.api_version, segments);
        debug!(method = %method, %url, "sending API request");

        let mut req_builder = self
            .http_client
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, self.auth.header_value().clone())
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        // Sets Content-Type: application/json.
        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| UpcloudError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error.error_message)
                .unwrap_or(text);
            warn!(method = %method, %url, "API rejected credentials");
            return Err(UpcloudError::Authentication(message));
        }

        let body = serde_json::from_str::<serde_json::Value>(&text)
            .unwrap_or(serde_json::Value::String(text));
        warn!(method = %method, %url, status = status.as_u16(), "API request failed");
        Err(UpcloudError::Api { status, body })
    }
}

fn build_rate_limiter(rl: &RateLimitConfig) -> UpcloudResult<Arc<DefaultDirectRateLimiter>> {
    rl.validate()?;
    let per_second = NonZeroU32::new(rl.requests_per_second)
        .ok_or_else(|| ValidationError::ConstraintViolation("rate limit of zero".to_string()))?;
    let burst = NonZeroU32::new(rl.burst_size)
        .ok_or_else(|| ValidationError::ConstraintViolation("burst size of zero".to_string()))?;
    let quota = Quota::per_second(per_second).allow_burst(burst);
    Ok(Arc::new(RateLimiter::direct(quota)))
}

async fn parse_response<T>(response: reqwest::Response, segments: &[&str]) -> UpcloudResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response
        .json::<T>()
        .await
        .map_err(|e| read_error(e, segments))
}

fn read_error(e: reqwest::Error, segments: &[&str]) -> UpcloudError {
    if e.is_decode() {
        UpcloudError::InvalidResponse(format!(
            "Failed to parse response of '{}': {}",
            segments.join("/"),
            e
        ))
    } else {
        UpcloudError::Connection(format!("Failed to read response body: {}", e))
    }
}
