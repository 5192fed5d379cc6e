use anyhow::Result;
use cmakefix_core::Config;
use cmakefix_utils::get_cmakefix_config;
use std::path::PathBuf;

use crate::options::ConfigOptions;

/// Effective configuration for one command: config file plus command-line overrides.
pub struct CommandContext {
    pub config: Config,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory is unavailable or the config file is invalid.
    pub async fn new(options: &ConfigOptions) -> Result<Self> {
        let current_dir = Self::current_dir()?;
        let config = options.apply(get_cmakefix_config(&current_dir).await?);
        Ok(Self { config })
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }
}
