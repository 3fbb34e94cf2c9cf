//! # HTTP Gateway
//!
//! The production [`Gateway`]: one `reqwest::Client` bound to a fixed base
//! URL. The bearer header is resolved from the injected
//! [`CredentialProvider`] on every request.

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::message::{ApiRequest, Method};
use crate::session::CredentialProvider;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Connection settings for [`HttpGateway`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Scheme, host and optional path prefix, e.g. `http://localhost:4000`.
    pub base_url: String,
    /// Whole-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }
}

pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpGateway {
    /// Builds the gateway and validates the base URL up front.
    pub fn new(
        config: GatewayConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, GatewayError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| GatewayError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<reqwest::Url, GatewayError> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        reqwest::Url::parse(&joined).map_err(|e| GatewayError::InvalidUrl(format!("{joined}: {e}")))
    }

    fn auth_headers(&self) -> Result<HeaderMap, GatewayError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.credentials.bearer_token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| GatewayError::InvalidHeader(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Pulls a human-readable message out of an error body.
///
/// The backend answers failures with `{"message": "..."}`; anything else is
/// passed through as text.
pub(crate) fn error_message(body: &[u8]) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) {
        if let Some(Value::String(message)) = map.get("message") {
            return message.clone();
        }
    }
    String::from_utf8_lossy(body).trim().to_string()
}

pub(crate) fn classify_failure(status: u16, body: &[u8]) -> GatewayError {
    let message = error_message(body);
    match StatusCode::from_u16(status) {
        Ok(StatusCode::UNAUTHORIZED) | Ok(StatusCode::FORBIDDEN) => {
            GatewayError::Unauthorized(message)
        }
        _ => GatewayError::Status { status, message },
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    #[instrument(name = "gateway_send", skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<Value, GatewayError> {
        let url = self.url_for(&request.path)?;
        let headers = self.auth_headers()?;
        debug!(body = ?request.body, "Sending request");

        let mut builder = self
            .client
            .request(to_reqwest(request.method), url)
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Transport failure");
            GatewayError::Transport(e.to_string())
        })?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(format!("read body failed: {e}")))?;

        if !status.is_success() {
            let error = classify_failure(status.as_u16(), &bytes);
            warn!(status = status.as_u16(), error = %error, "Request rejected");
            return Err(error);
        }
        debug!(status = status.as_u16(), size = bytes.len(), "Response received");

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}
