use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{error::ConfigError, version::Threshold};

/// Loaded from `.cmakefix/config.json`, controls the threshold, the scanned tree and the run log.
///
/// Every field has a default, so a partial (or missing) config file is valid. Command-line
/// flags override whatever the file provides.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Minimum version every directive must meet (default: "3.5")
    #[serde(default = "default_min_version")]
    pub min_version: String,

    /// Root directory to scan (default: ".")
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory holding the run log (default: "./logs")
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Run log file name inside `log_dir` (default: "cmake_patch_log.txt")
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Exact name of the files to patch (default: "CMakeLists.txt")
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Glob patterns, relative to `root`, for files or directories to skip (e.g. "build/**")
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_min_version() -> String {
    "3.5".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_log_file() -> String {
    "cmake_patch_log.txt".to_string()
}

fn default_file_name() -> String {
    "CMakeLists.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_version: default_min_version(),
            root: default_root(),
            log_dir: default_log_dir(),
            log_file: default_log_file(),
            file_name: default_file_name(),
            ignore: Vec::new(),
        }
    }
}

impl Config {
    /// Full path of the append-only run log
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }

    /// Parsed `min_version`.
    ///
    /// # Errors
    /// Returns error if the configured minimum version does not parse.
    pub fn threshold(&self) -> Result<Threshold, ConfigError> {
        Ok(Threshold::parse(&self.min_version)?)
    }
}
