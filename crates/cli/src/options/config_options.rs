use std::path::PathBuf;

use clap::Args;
use cmakefix_core::Config;

/// Command-line overrides for `.cmakefix/config.json`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOptions {
    /// Root directory to scan
    pub path: Option<PathBuf>,

    /// Minimum version every directive must meet
    #[arg(short = 'v', long)]
    pub min_version: Option<String>,

    /// Directory holding the run log
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Run log file name inside the log directory
    #[arg(long)]
    pub log_file: Option<String>,

    /// Exact name of the files to patch
    #[arg(long)]
    pub file_name: Option<String>,

    /// Glob (relative to the root) of files or directories to skip; repeatable
    #[arg(short, long = "ignore")]
    pub ignore: Vec<String>,
}

impl ConfigOptions {
    /// Apply the given flags on top of `config`; ignore globs are added to the configured ones.
    #[must_use]
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.path {
            config.root.clone_from(path);
        }
        if let Some(min_version) = &self.min_version {
            config.min_version.clone_from(min_version);
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir.clone_from(log_dir);
        }
        if let Some(log_file) = &self.log_file {
            config.log_file.clone_from(log_file);
        }
        if let Some(file_name) = &self.file_name {
            config.file_name.clone_from(file_name);
        }
        config.ignore.extend(self.ignore.iter().cloned());
        config
    }
}
