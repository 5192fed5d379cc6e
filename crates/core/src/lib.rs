//! # cmakefix-core
//!
//! Core types and traits shared by the cmakefix crates.
//!
//! Holds the `(major, minor)` version comparator, the directive and report types, the run
//! configuration and the `BuildFileFinder` visitor used while walking a source tree.

pub mod build_file_finder;
pub mod config;
pub mod directive;
pub mod error;
pub mod patch_log;
pub mod patch_report;
pub mod version;

// Re-export types for convenience
pub use build_file_finder::BuildFileFinder;
pub use config::Config;
pub use directive::{DirectiveKind, DirectiveMatch};
pub use error::{ConfigError, VersionParseError};
pub use patch_log::{PatchLog, RUN_MARKER};
pub use patch_report::{DirectiveUpdate, PatchReport, SkippedFile};
pub use version::{Threshold, Version, needs_update};
