use std::path::PathBuf;

use anyhow::{Context, Result};
use cmakefix_core::{Config, PatchLog};
use tokio::{
    fs::{OpenOptions, create_dir_all},
    io::AsyncWriteExt,
};

/// Append one run block to the log file, creating the log directory first.
///
/// Returns the log file path. Existing content is never truncated.
///
/// # Errors
/// Returns error if the directory cannot be created or the file cannot be appended to.
pub async fn append_patch_log(config: &Config, log: &PatchLog) -> Result<PathBuf> {
    create_dir_all(&config.log_dir).await.context(format!(
        "Failed to create log directory {}",
        config.log_dir.display()
    ))?;
    let log_path = config.log_path();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .await
        .context(format!("Failed to open log file {}", log_path.display()))?;
    file.write_all(log.render().as_bytes())
        .await
        .context(format!("Failed to write log file {}", log_path.display()))?;
    file.flush().await?;
    Ok(log_path)
}
