//! rpmlog Core - Shared errors and configuration
//!
//! This crate provides the error types and configuration loading used by the
//! git, changelog and CLI crates of rpmlog.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Config, QueryConfig};
pub use error::{RpmlogError, Result};
