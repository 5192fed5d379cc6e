use anyhow::Result;
use clap::Args;
use thiserror::Error;

use crate::{
    context::CommandContext,
    options::{ConfigOptions, FormatOptions},
    patch_tree::{PatchOptions, patch_tree},
};

/// Returned by `check` when at least one directive is below the minimum version
#[derive(Debug, Error)]
#[error("{directives} outdated directive(s) in {files} file(s)")]
pub struct OutdatedDirectives {
    pub directives: usize,
    pub files: usize,
}

#[derive(Args, Debug)]
#[command(about = "List directives below the minimum version without modifying anything")]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigOptions,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Check every qualifying file and fail if any directive is outdated
///
/// # Errors
/// Returns error on invalid configuration, or `OutdatedDirectives` when an update is due.
pub async fn handle_check(args: &CheckArgs) -> Result<()> {
    let context = CommandContext::new(&args.config).await?;
    let options = PatchOptions {
        dry_run: true,
        fail_fast: false,
        format: args.format,
    };
    let report = patch_tree(&context.config, &options).await?;

    let summary = format!(
        "Checked {} file(s) against minimum version {}",
        report.visited, context.config.min_version
    );
    args.format
        .print(&summary, &serde_json::to_string_pretty(&report)?);

    if report.updates.is_empty() {
        return Ok(());
    }
    Err(OutdatedDirectives {
        directives: report.updates.len(),
        files: report.modified.len(),
    }
    .into())
}
