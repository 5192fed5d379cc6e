use tokio::fs::{create_dir_all, write};

use anyhow::Result;
use clap::Args;
use cmakefix_core::Config;
use cmakefix_utils::{CONFIG_FILE, get_cmakefix_dir};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Write a default .cmakefix/config.json")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    pub dry_run: bool,
}

/// Initialize cmakefix configuration in the current directory
///
/// # Errors
/// Returns error if a config file already exists or it cannot be written.
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let current_dir = CommandContext::current_dir()?;
    let cmakefix_dir = get_cmakefix_dir(&current_dir);
    let config_file = cmakefix_dir.join(CONFIG_FILE);
    if config_file.exists() {
        return Err(anyhow::anyhow!("cmakefix config already initialized"));
    }
    if !args.dry_run {
        create_dir_all(&cmakefix_dir).await?;
        write(
            &config_file,
            serde_json::to_string_pretty(&Config::default())?,
        )
        .await?;
    }

    println!("cmakefix config initialized in {}", cmakefix_dir.display());
    Ok(())
}
