//! Linear API client for roadmap seeding.
//!
//! This crate provides:
//! - Environment-driven configuration for the Linear API
//! - A GraphQL transport with bearer authentication and a fixed timeout
//! - A typed resource client for labels and issues
//! - Type definitions for the Linear entities the seeder touches

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Every remote operation can fail in transport

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{LinearClient, ResourceClient};
pub use config::LinearConfig;
pub use error::{ConfigError, TransportError};
pub use models::*;
pub use transport::{HttpTransport, Transport};
