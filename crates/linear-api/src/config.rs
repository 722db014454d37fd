//! Configuration for the Linear API client.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Linear API endpoint
pub const DEFAULT_API_URL: &str = "https://api.linear.app/graphql";

/// Per-request timeout applied when `LINEAR_TIMEOUT_SECS` is unset
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credentials and endpoint settings for one seeding run.
///
/// Built once at startup and handed to the transport; nothing reads the
/// environment after that.
#[derive(Clone, PartialEq, Eq)]
pub struct LinearConfig {
    /// Personal API key or OAuth access token
    pub api_key: String,
    /// Team that owns created labels and issues
    pub team_id: String,
    /// GraphQL endpoint
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl LinearConfig {
    /// Create a config with default endpoint and timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            team_id: team_id.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the GraphQL endpoint.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from process environment.
    ///
    /// Reads:
    /// - `LINEAR_API_KEY` (required)
    /// - `LINEAR_TEAM_ID` (required)
    /// - `LINEAR_API_URL` (optional)
    /// - `LINEAR_TIMEOUT_SECS` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        let api_key = required("LINEAR_API_KEY")?;
        let team_id = required("LINEAR_TEAM_ID")?;

        let mut config = Self::new(api_key, team_id);

        if let Some(url) = lookup("LINEAR_API_URL").filter(|s| !s.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }

        if let Some(raw) = lookup("LINEAR_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "LINEAR_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

impl fmt::Debug for LinearConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearConfig")
            .field("api_key", &"<redacted>")
            .field("team_id", &self.team_id)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
