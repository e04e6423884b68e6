//! Stripe API client implementation.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

use stripe_node_core::{form, Method, NodeError, RequestSpec};

use super::types::StripeErrorResponse;
use crate::config::{CredentialStore, StripeConfig};
use crate::context::RequestTransport;

/// Error type for Stripe operations.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe API returned an error.
    #[error("Stripe API error: {error_type} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error type.
        error_type: String,
        /// Error message.
        message: String,
        /// Error code.
        code: Option<String>,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No credential is stored under the requested name.
    #[error("Unknown credential: {0}")]
    UnknownCredential(String),

    /// A path segment would not address a single object.
    #[error("invalid path segment '{0}'")]
    InvalidPathSegment(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<StripeError> for NodeError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::Api {
                status,
                error_type,
                message,
                code,
            } => Self::Api {
                status,
                error_type,
                message,
                code,
            },
            StripeError::Http(e) => Self::Http(e.to_string()),
            StripeError::Serialization(e) => Self::UnexpectedResponse(e.to_string()),
            StripeError::UnknownCredential(name) => Self::UnknownCredential(name),
            StripeError::InvalidPathSegment(segment) => Self::InvalidPathSegment(segment),
            StripeError::Configuration(msg) => Self::Configuration(msg),
        }
    }
}

/// Stripe API client.
///
/// Implements [`RequestTransport`]: requests authenticate with HTTP basic
/// auth using the secret key of the selected credential, and bodies and
/// queries are sent form encoded.
#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    base_url: Url,
    credentials: CredentialStore,
}

impl StripeClient {
    /// Create a client for the live API with a single secret key.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(&StripeConfig::new(api_key)).expect("Failed to build HTTP client")
    }

    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn from_config(config: &StripeConfig) -> Result<Self, StripeError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            StripeError::Configuration(format!("invalid base URL {}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(StripeError::Configuration(format!(
                "base URL {} cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url,
            credentials: config.credential_store(),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Send a request and return the parsed response.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is unknown, the request fails, or
    /// Stripe responds with a non-2xx status.
    pub async fn send(
        &self,
        spec: &RequestSpec,
        credential: Option<&str>,
    ) -> Result<Value, StripeError> {
        let api_key = self.credentials.resolve(credential).ok_or_else(|| {
            StripeError::UnknownCredential(credential.unwrap_or_default().to_string())
        })?;

        let url = self.url(&spec.segments)?;

        tracing::debug!(
            method = %spec.method,
            url = %url,
            credential = credential.unwrap_or("default"),
            "Calling Stripe API"
        );

        let mut request = self
            .client
            .request(http_method(spec.method), url)
            .basic_auth(api_key, Option::<&str>::None);

        if !spec.query.is_empty() {
            request = request.query(&form::encode(&spec.query));
        }
        if !spec.body.is_empty() {
            request = request.form(&form::encode(&spec.body));
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Build the URL for `segments`, escaping each one.
    ///
    /// Empty, `.` and `..` segments are rejected: escaping leaves them intact
    /// and URL normalisation would drop them, changing the route.
    fn url(&self, segments: &[String]) -> Result<Url, StripeError> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(segment.as_str(), "" | "." | ".."))
        {
            return Err(StripeError::InvalidPathSegment(segment.clone()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StripeError::Configuration("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Handle API response and convert errors.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, StripeError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse error response
        let error_body: Result<StripeErrorResponse, _> = response.json().await;

        match error_body {
            Ok(stripe_error) => Err(StripeError::Api {
                status: status.as_u16(),
                error_type: stripe_error.error.error_type,
                message: stripe_error.error.message,
                code: stripe_error.error.code,
            }),
            Err(_) => Err(StripeError::Api {
                status: status.as_u16(),
                error_type: "unknown".to_string(),
                message: format!("HTTP {status}"),
                code: None,
            }),
        }
    }
}

#[async_trait]
impl RequestTransport for StripeClient {
    async fn request(
        &self,
        spec: RequestSpec,
        credential: Option<&str>,
    ) -> Result<Value, NodeError> {
        Ok(self.send(&spec, credential).await?)
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    }
}
