use anyhow::Result;
use cmakefix_cmake::patch_file;
use cmakefix_core::{BuildFileFinder, Config, PatchLog, PatchReport, SkippedFile};
use cmakefix_utils::{
    append_patch_log, display_no_changes, display_skipped, display_update, display_updated,
    find_build_files,
};
use std::path::PathBuf;

use crate::{finders::get_finders, options::FormatOptions};

#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Compute changes without writing files or the run log
    pub dry_run: bool,
    /// Abort on the first file that cannot be patched instead of skipping it
    pub fail_fast: bool,
    pub format: FormatOptions,
}

/// Walk `config.root` and patch every qualifying file, one at a time in walking order.
///
/// A file that fails to read, parse or write is skipped with a warning unless
/// `fail_fast` is set; files already rewritten at that point stay rewritten.
///
/// # Errors
/// Returns error on configuration problems (root, threshold, ignore globs), or on the first
/// per-file failure with `fail_fast`.
pub async fn patch_tree(config: &Config, options: &PatchOptions) -> Result<PatchReport> {
    let threshold = config.threshold()?;
    let mut finders = get_finders(config);
    let unreadable = find_build_files(&config.root, &config.ignore, &mut finders).await?;

    let mut report = PatchReport::new(options.dry_run);
    for skipped in unreadable {
        options.format.warn(&display_skipped(&skipped));
        report.skipped.push(skipped);
    }

    let build_files = finders
        .iter()
        .flat_map(|finder| finder.build_files().iter().cloned())
        .collect::<Vec<PathBuf>>();
    for path in build_files {
        report.visited += 1;
        match patch_file(&path, &threshold, options.dry_run).await {
            Ok(patch) => {
                if patch.modified {
                    if options.dry_run {
                        for update in &patch.updates {
                            options.format.status(&display_update(update));
                        }
                    } else {
                        options.format.status(&display_updated(&path));
                    }
                    report.add_modified(&path);
                }
                report.updates.extend(patch.updates);
            }
            Err(err) if options.fail_fast => {
                return Err(err.context(format!("Aborted at {}", path.display())));
            }
            Err(err) => {
                let skipped = SkippedFile::new(&path, format!("{err:#}"));
                options.format.warn(&display_skipped(&skipped));
                report.skipped.push(skipped);
            }
        }
    }
    Ok(report)
}

/// Append the run block for `report`, or report that nothing changed.
///
/// Nothing is appended for a dry run. Returns the log path when a block was written.
///
/// # Errors
/// Returns error if the log directory or file cannot be written.
pub async fn write_run_log(
    config: &Config,
    report: &PatchReport,
    format: FormatOptions,
) -> Result<Option<PathBuf>> {
    if report.is_unchanged() {
        format.status(&display_no_changes());
        return Ok(None);
    }
    if report.dry_run {
        return Ok(None);
    }
    let log_path = append_patch_log(config, &PatchLog::new(report.modified.clone())).await?;
    Ok(Some(log_path))
}
