//! One-time local environment setup: `.env` from its template and the data
//! directory. Both steps are idempotent.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::RoadmapError;

/// Variables a `.env` file must define for the roadmap commands.
pub const REQUIRED_VARS: [&str; 2] = ["LINEAR_API_KEY", "LINEAR_TEAM_ID"];

/// Result of [`ensure_env_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// Copied from the template
    Created,
    /// Left untouched
    AlreadyExists,
    /// Neither `.env` nor the template exist
    TemplateMissing,
}

/// Copy `template` to `env_file` unless `env_file` already exists.
pub fn ensure_env_file(env_file: &Path, template: &Path) -> Result<EnvFileStatus, RoadmapError> {
    if env_file.exists() {
        debug!(path = %env_file.display(), "Env file already present");
        return Ok(EnvFileStatus::AlreadyExists);
    }
    if !template.exists() {
        return Ok(EnvFileStatus::TemplateMissing);
    }

    let content =
        fs::read_to_string(template).map_err(|e| RoadmapError::io("read", template, e))?;
    fs::write(env_file, content).map_err(|e| RoadmapError::io("write", env_file, e))?;
    Ok(EnvFileStatus::Created)
}

/// Create `dir` (and parents). Returns `true` if it did not exist before.
pub fn ensure_data_dir(dir: &Path) -> Result<bool, RoadmapError> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|e| RoadmapError::io("create directory", dir, e))?;
    Ok(true)
}

/// Load `env_file` into the process environment. Variables already set
/// are kept. Returns `false` when the file does not exist.
pub fn load_env_file(env_file: &Path) -> Result<bool, RoadmapError> {
    match dotenvy::from_path(env_file) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(source) => Err(RoadmapError::EnvFile {
            path: env_file.to_path_buf(),
            source,
        }),
    }
}

/// Required variables that `env_file` leaves unset or empty.
///
/// The file is parsed the same way it is loaded at startup, so `export`
/// prefixes, quoting and comments behave identically.
pub fn missing_vars(env_file: &Path) -> Result<Vec<&'static str>, RoadmapError> {
    let env_error = |source: dotenvy::Error| RoadmapError::EnvFile {
        path: env_file.to_path_buf(),
        source,
    };

    let mut values = HashMap::new();
    for item in dotenvy::from_path_iter(env_file).map_err(env_error)? {
        let (key, value) = item.map_err(env_error)?;
        values.insert(key, value);
    }

    Ok(REQUIRED_VARS
        .into_iter()
        .filter(|var| {
            !values
                .get(*var)
                .is_some_and(|value: &String| !value.trim().is_empty())
        })
        .collect())
}
