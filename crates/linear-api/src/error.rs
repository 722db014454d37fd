//! Error types for the Linear API client.
//!
//! Only configuration and transport problems are errors. A remote response
//! carrying `success: false` is an expected outcome and is reported through
//! the return value of the resource operation instead.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is absent or empty
    #[error("{0} must be set in the environment or .env file")]
    MissingVar(&'static str),

    /// A setting is present but cannot be used
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Errors that abort a single GraphQL call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout
    #[error("Request to Linear API timed out")]
    Timeout,

    /// The connection could not be established
    #[error("Failed to connect to Linear API: {0}")]
    Connect(#[source] reqwest::Error),

    /// Linear answered with a non-2xx status
    #[error("Linear API returned error status {status}: {body}")]
    Status { status: u16, body: String },

    /// Any other request failure
    #[error("Failed to send request to Linear API: {0}")]
    Request(#[source] reqwest::Error),

    /// The 2xx response body was not valid JSON
    #[error("Failed to parse Linear API response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The API key cannot be placed in an HTTP header
    #[error("Invalid access token")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err)
        } else if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Request(err)
        }
    }
}

impl TransportError {
    /// Linear rejected the credential (401 or 403).
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
