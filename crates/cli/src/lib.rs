use anyhow::Result;

use clap::{Parser, Subcommand};

use crate::commands::{
    CheckArgs, ConfigArgs, InitArgs, PatchArgs, handle_check, handle_config, handle_init,
    handle_patch,
};
pub mod commands;
mod context;
mod finders;
pub mod options;
pub mod patch_tree;

pub use commands::OutdatedDirectives;

#[derive(Parser, Debug)]
#[command(
    name = "cmakefix",
    author,
    version,
    about = "Raise cmake_minimum_required / cmake_policy versions below a minimum across a source tree",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    patch: PatchArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Check(CheckArgs),
    Init(InitArgs),
    Config(ConfigArgs),
}

/// # Errors
/// Returns error if the selected command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Check(args) => handle_check(&args).await?,
            Commands::Init(args) => handle_init(&args).await?,
            Commands::Config(args) => handle_config(&args).await?,
        }
    } else {
        handle_patch(&cli.patch).await?;
    }
    Ok(())
}
