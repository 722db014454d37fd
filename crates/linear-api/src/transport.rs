//! GraphQL transport for the Linear API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::LinearConfig;
use crate::error::TransportError;

/// Issues one GraphQL document per call and returns the decoded body.
///
/// A 2xx response is returned as-is even when its payload reports an
/// application failure. Reading `success` flags is the caller's job.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a query or mutation with the given variables.
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, TransportError>;
}

/// GraphQL request body
#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: Value,
}

/// `reqwest`-backed transport bound to one endpoint and one credential.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    api_url: String,
}

impl HttpTransport {
    /// Build a transport from configuration.
    ///
    /// Linear personal API keys (`lin_api_*`) are sent without a scheme;
    /// OAuth access tokens get the `Bearer` prefix.
    pub fn new(config: &LinearConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&authorization_value(&config.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(TransportError::Request)?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Endpoint this transport posts to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Authorization header value for a credential.
#[must_use]
pub fn authorization_value(api_key: &str) -> String {
    if api_key.starts_with("lin_api_") {
        api_key.to_string()
    } else {
        format!("Bearer {api_key}")
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, TransportError> {
        let request = GraphQLRequest {
            query: document,
            variables,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Decode(e)
            }
        })?;
        debug!(status = status.as_u16(), "Linear API responded");
        Ok(body)
    }
}
