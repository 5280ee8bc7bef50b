//! rpmlog Changelog - RPM changelog derivation
//!
//! This crate walks a package repository's history, resolves the
//! name/version/release of every relevant commit, groups commits by release
//! and renders them as `%changelog` entries.

pub mod filter;
pub mod formatter;
pub mod generator;
pub mod observer;
pub mod query;
pub mod types;

pub use filter::RelevanceFilter;
pub use formatter::{ChangelogFormatter, RpmFormatter};
pub use generator::{Changelog, ChangelogGenerator};
pub use observer::{TracingObserver, WalkObserver};
pub use query::{resolve_nvr, MetadataQuery, RpmSpecQuery};
pub use types::{ChangelogEntry, ChangelogGroup, ChangelogGroups, Nvr, StopReason, WalkSummary};
