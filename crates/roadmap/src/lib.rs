//! Learning-roadmap seeder for Linear.
//!
//! This crate provides:
//! - The curriculum catalog (labels, modules, sub-tasks)
//! - A write-once registry of remote ids for one run
//! - The orchestrator that creates the roadmap through a resource client
//! - Console reporting, the issue table view and local environment bootstrap

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod bootstrap;
pub mod catalog;
pub mod console;
pub mod display;
pub mod error;
pub mod menu;
pub mod registry;
pub mod report;
pub mod sync;
pub mod ui;

pub use catalog::{LabelSpec, ModuleSpec, Roadmap, SubTaskSpec};
pub use error::RoadmapError;
pub use registry::{Registry, RegistryKey};
pub use report::{Outcome, SyncReport, SyncReporter};
pub use sync::{ExistingPolicy, RoadmapSync, SyncOptions};

use linear_api::{LinearClient, LinearConfig};
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber. `RUST_LOG` wins when set.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info,roadmap=debug,linear_api=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Build a Linear client from process configuration.
///
/// Fails with [`RoadmapError::Config`] before any network activity when
/// credentials are missing.
pub fn client_from_env() -> Result<LinearClient, RoadmapError> {
    let config = LinearConfig::from_env()?;
    tracing::debug!(?config, "Loaded Linear configuration");
    Ok(LinearClient::from_config(&config)?)
}
