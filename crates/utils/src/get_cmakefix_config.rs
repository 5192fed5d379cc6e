use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cmakefix_core::Config;
use tokio::fs::read_to_string;

pub const CONFIG_DIR: &str = ".cmakefix";
pub const CONFIG_FILE: &str = "config.json";

#[must_use]
pub fn get_cmakefix_dir(current_dir: &Path) -> PathBuf {
    current_dir.join(CONFIG_DIR)
}

/// Load `.cmakefix/config.json` from `current_dir`, falling back to defaults when absent.
///
/// # Errors
/// Returns error if the file exists but cannot be read or is not valid JSON.
pub async fn get_cmakefix_config(current_dir: &Path) -> Result<Config> {
    let config_file = get_cmakefix_dir(current_dir).join(CONFIG_FILE);
    if !config_file.is_file() {
        return Ok(Config::default());
    }
    let config_json = read_to_string(&config_file)
        .await
        .context(format!("Failed to read {}", config_file.display()))?;
    let config: Config = serde_json::from_str(&config_json)
        .context(format!("Invalid config file {}", config_file.display()))?;
    Ok(config)
}
