//! Error types for the roadmap tool.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use linear_api::{ConfigError, TransportError};
use thiserror::Error;

/// Errors that end a roadmap command.
#[derive(Debug, Error)]
pub enum RoadmapError {
    /// Credentials or settings missing before any network call
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A Linear API call failed in transport
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Local filesystem operation failed
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An env file could not be read or parsed
    #[error("Failed to load {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// Unrecognized interactive menu input
    #[error("Invalid choice: {0:?}")]
    InvalidChoice(String),
}

impl RoadmapError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Whether one error in a source chain means the Linear credentials are
/// missing or were rejected.
#[must_use]
pub fn is_credentials_cause(cause: &(dyn StdError + 'static)) -> bool {
    if cause.is::<ConfigError>() {
        return true;
    }
    if let Some(err) = cause.downcast_ref::<TransportError>() {
        return err.is_auth_failure();
    }
    match cause.downcast_ref::<RoadmapError>() {
        Some(RoadmapError::Config(_)) => true,
        Some(RoadmapError::Transport(err)) => err.is_auth_failure(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16) -> TransportError {
        TransportError::Status {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_credentials_causes() {
        assert!(is_credentials_cause(&ConfigError::MissingVar("LINEAR_API_KEY")));
        assert!(is_credentials_cause(&RoadmapError::Config(
            ConfigError::MissingVar("LINEAR_TEAM_ID")
        )));
        assert!(is_credentials_cause(&status(401)));
        assert!(is_credentials_cause(&RoadmapError::Transport(status(403))));
    }

    #[test]
    fn test_outages_are_not_credentials_causes() {
        assert!(!is_credentials_cause(&status(500)));
        assert!(!is_credentials_cause(&TransportError::Timeout));
        assert!(!is_credentials_cause(&RoadmapError::Transport(status(502))));
        assert!(!is_credentials_cause(&RoadmapError::InvalidChoice("9".into())));
    }

    #[test]
    fn test_invalid_choice_message() {
        assert_eq!(
            RoadmapError::InvalidChoice("9".into()).to_string(),
            "Invalid choice: \"9\""
        );
    }
}
