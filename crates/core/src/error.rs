use std::path::PathBuf;

use thiserror::Error;

/// A directive or threshold version whose major or minor component is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version `{version}`: `{component}` is not an unsigned integer")]
pub struct VersionParseError {
    version: String,
    component: String,
}

impl VersionParseError {
    #[must_use]
    pub fn new(version: &str, component: &str) -> Self {
        Self {
            version: version.to_string(),
            component: component.to_string(),
        }
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Problems with the run configuration, reported before any file is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("root directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),
    #[error("invalid minimum version: {0}")]
    InvalidThreshold(#[from] VersionParseError),
    #[error("invalid ignore pattern `{pattern}`: {reason}")]
    InvalidIgnorePattern { pattern: String, reason: String },
}
