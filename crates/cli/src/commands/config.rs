use anyhow::Result;
use clap::Args;

use crate::{context::CommandContext, options::ConfigOptions};

#[derive(Args, Debug)]
#[command(about = "Show the effective cmakefix configuration")]
pub struct ConfigArgs {
    #[command(flatten)]
    pub config: ConfigOptions,
}

/// Display cmakefix configuration, with command-line overrides applied
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(args: &ConfigArgs) -> Result<()> {
    let context = CommandContext::new(&args.config).await?;
    println!("{}", serde_json::to_string_pretty(&context.config)?);
    Ok(())
}
