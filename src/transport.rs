//! HTTP transport for the DataHub API.
//!
//! The transport is handed to the jobs layer as an explicit dependency,
//! which keeps the job lifecycle testable against an in-memory
//! implementation.

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::time::Instant;

use crate::auth::AuthProvider;
use crate::error::ApiError;

/// Raw response from the remote service: the status code plus the body
/// text, read exactly once when the response arrives. Error decoding
/// works on this captured text.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Success = status in [200, 300).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues HTTP requests against the remote job service.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and capture status plus body text.
    async fn fetch(
        &self,
        method: Method,
        path: &str,
        body: Option<&JsonValue>,
    ) -> Result<RawResponse, ApiError>;
}

/// reqwest-backed transport used in production.
///
/// Paths are appended to `base_url`, which carries the deployment's API
/// prefix (e.g. `http://host:9047/api/v3`).
pub struct HttpTransport {
    base_url: String,
    http_client: reqwest::Client,
    auth: AuthProvider,
}

impl HttpTransport {
    pub fn new(base_url: String, http_client: reqwest::Client, auth: AuthProvider) -> Self {
        Self {
            base_url,
            http_client,
            auth,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(
        &self,
        method: Method,
        path: &str,
        body: Option<&JsonValue>,
    ) -> Result<RawResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[HUB_HTTP] {} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        request = self.auth.apply_to_request(request);

        let start = Instant::now();
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(
            "[HUB_HTTP] Response: status={} bytes={} duration_ms={}",
            status,
            body.len(),
            start.elapsed().as_millis()
        );

        Ok(RawResponse { status, body })
    }
}

/// Structured error body shape reported by the service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
}

/// Decode a successful JSON response, or turn a non-success response into
/// a server error. The error message is the body's `errorMessage` field
/// when it parses as JSON and carries one, otherwise the raw body text
/// verbatim.
pub(crate) fn decode_response<T: DeserializeOwned>(response: RawResponse) -> Result<T, ApiError> {
    if response.is_success() {
        Ok(serde_json::from_str(&response.body)?)
    } else {
        Err(error_from_response(response))
    }
}

fn error_from_response(response: RawResponse) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.error_message)
        .unwrap_or(response.body);
    ApiError::Server {
        status_code: response.status,
        message,
    }
}
