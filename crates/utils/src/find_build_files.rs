use std::path::Path;

use anyhow::Result;
use cmakefix_core::{BuildFileFinder, ConfigError, SkippedFile};
use glob::Pattern;
use ignore::WalkBuilder;

use crate::get_relative_path;

/// Distinguish a misconfigured root from a tree that simply has no build files.
///
/// # Errors
/// Returns error if `root` is missing or is not a directory.
pub fn check_root(root: &Path) -> Result<(), ConfigError> {
    if !root.exists() {
        return Err(ConfigError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ConfigError::RootNotDirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Compile the configured ignore globs.
///
/// # Errors
/// Returns error if a pattern is not a valid glob.
pub fn compile_ignore_patterns(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|e| ConfigError::InvalidIgnorePattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Walk `root` recursively and hand every entry to each finder.
///
/// Entries are visited sorted by file name so the order is stable between runs. Hidden
/// directories and `.gitignore`d paths are walked like any other; only `ignore` globs
/// (relative to `root`) prune the walk. Entries that cannot be read are returned as
/// skipped instead of failing the walk.
///
/// # Errors
/// Returns error if the root is invalid, an ignore glob does not compile, or a finder fails.
pub async fn find_build_files(
    root: &Path,
    ignore: &[String],
    finders: &mut [Box<dyn BuildFileFinder>],
) -> Result<Vec<SkippedFile>> {
    check_root(root)?;
    let patterns = compile_ignore_patterns(ignore)?;
    let walk_root = root.to_path_buf();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| !is_ignored(&walk_root, entry.path(), &patterns))
        .build();

    let mut unreadable = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry
                    .file_type()
                    .is_some_and(|t| t.is_file() || t.is_symlink())
                {
                    continue;
                }
                for finder in finders.iter_mut() {
                    finder.visit(entry.path()).await?;
                }
            }
            Err(err) => {
                let path = error_path(&err).unwrap_or(root).to_path_buf();
                unreadable.push(SkippedFile::new(&path, err.to_string()));
            }
        }
    }
    Ok(unreadable)
}

fn is_ignored(root: &Path, path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let Ok(relative) = get_relative_path(root, path) else {
        return false;
    };
    if relative.as_os_str().is_empty() {
        return false;
    }
    patterns.iter().any(|p| p.matches_path(&relative))
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}
