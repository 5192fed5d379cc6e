use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::{
    context::CommandContext,
    options::{ConfigOptions, FormatOptions},
    patch_tree::{PatchOptions, patch_tree, write_run_log},
};

#[derive(Args, Debug, Clone, Default)]
pub struct PatchArgs {
    #[command(flatten)]
    pub config: ConfigOptions,

    /// Report what would change without writing files or the run log
    #[arg(short, long)]
    pub dry_run: bool,

    /// Abort on the first file that cannot be patched
    #[arg(long)]
    pub fail_fast: bool,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Patch every qualifying file under the root and log the modified paths
///
/// # Errors
/// Returns error on invalid configuration, on a per-file failure with `--fail-fast`, or if
/// the run log cannot be written.
pub async fn handle_patch(args: &PatchArgs) -> Result<()> {
    let context = CommandContext::new(&args.config).await?;
    let options = PatchOptions {
        dry_run: args.dry_run,
        fail_fast: args.fail_fast,
        format: args.format,
    };
    let report = patch_tree(&context.config, &options).await?;
    let log_path = write_run_log(&context.config, &report, args.format).await?;

    if let Some(log_path) = log_path {
        args.format.status(&format!(
            "{} Logged {} file(s) to {}",
            "[LOG]".bright_black(),
            report.modified.len(),
            log_path.display()
        ));
    }
    if args.dry_run && !report.is_unchanged() {
        args.format.status("Dry run, no files were written");
    }
    if let FormatOptions::Json = args.format {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
