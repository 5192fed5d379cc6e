use std::path::Path;

use cmakefix_core::{DirectiveUpdate, SkippedFile};
use colored::Colorize;

pub fn display_updated(path: &Path) -> String {
    format!("{} {}", "[UPDATED]".green().bold(), path.display())
}

pub fn display_no_changes() -> String {
    format!("{} No changes needed.", "[OK]".green().bold())
}

pub fn display_skipped(skipped: &SkippedFile) -> String {
    format!(
        "{} {}: {}",
        "[SKIPPED]".yellow().bold(),
        skipped.path.display(),
        skipped.reason
    )
}

/// `path:line command old → new`, with a one-based line number
pub fn display_update(update: &DirectiveUpdate) -> String {
    format!(
        "{}:{} {} {} {} {}",
        update.path.display(),
        update.line + 1,
        update.kind.to_string().bright_blue().bold(),
        update.from.bright_red(),
        "→".bright_cyan(),
        update.to.bright_green()
    )
}
