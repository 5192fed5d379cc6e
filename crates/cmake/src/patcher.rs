use std::path::Path;

use anyhow::{Context, Result};
use cmakefix_core::{DirectiveKind, DirectiveUpdate, Threshold, Version, VersionParseError};
use tokio::fs::{read_to_string, write};

use crate::matcher::{match_line, split_range};

/// A directive rewritten within a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    pub line: usize,
    pub kind: DirectiveKind,
    pub from: String,
    pub to: String,
}

/// Result of patching text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPatch {
    pub content: String,
    pub changes: Vec<LineChange>,
}

impl ContentPatch {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Rewrite every directive below `threshold`, keeping the rest of the text byte-for-byte.
///
/// Lines keep their terminators. Only the version token is replaced; for a `min...max`
/// range only `min` is, unless `max` is below the threshold too.
///
/// # Errors
/// Returns error if a matched directive carries a version that does not parse.
pub fn patch_content(
    content: &str,
    threshold: &Threshold,
) -> Result<ContentPatch, VersionParseError> {
    let mut patched = String::with_capacity(content.len());
    let mut changes = Vec::new();
    for (index, line) in content.split_inclusive('\n').enumerate() {
        match patch_line(index, line, threshold)? {
            Some((new_line, change)) => {
                patched.push_str(&new_line);
                changes.push(change);
            }
            None => patched.push_str(line),
        }
    }
    Ok(ContentPatch {
        content: patched,
        changes,
    })
}

fn patch_line(
    index: usize,
    line: &str,
    threshold: &Threshold,
) -> Result<Option<(String, LineChange)>, VersionParseError> {
    let Some(directive) = match_line(index, line) else {
        return Ok(None);
    };
    let (min, max) = split_range(&directive.version);
    if !Version::parse(min)?.needs_update(threshold.version()) {
        return Ok(None);
    }
    let replace_range = max
        .and_then(|max| Version::parse(max).ok())
        .is_some_and(|max| max.needs_update(threshold.version()));
    let span = if replace_range {
        directive.span
    } else {
        directive.span.start..directive.span.start + min.len()
    };

    let new_line = format!(
        "{}{}{}",
        &line[..span.start],
        threshold.text(),
        &line[span.end..]
    );
    let change = LineChange {
        line: index,
        kind: directive.kind,
        from: line[span].to_string(),
        to: threshold.text().to_string(),
    };
    Ok(Some((new_line, change)))
}

/// Outcome of patching one file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePatch {
    pub updates: Vec<DirectiveUpdate>,
    /// Whether the file was (or, in a dry run, would be) rewritten
    pub modified: bool,
}

/// Patch the file at `path` in place; the file is written only if a directive changed.
///
/// With `dry_run`, the changes are computed and returned but nothing is written.
///
/// # Errors
/// Returns error if the file cannot be read as UTF-8, a directive version does not parse,
/// or the file cannot be written back.
pub async fn patch_file(path: &Path, threshold: &Threshold, dry_run: bool) -> Result<FilePatch> {
    let content = read_to_string(path)
        .await
        .context(format!("Failed to read {}", path.display()))?;
    let patch = patch_content(&content, threshold)?;
    if !patch.is_changed() {
        return Ok(FilePatch {
            updates: vec![],
            modified: false,
        });
    }
    if !dry_run {
        write(path, patch.content.as_bytes())
            .await
            .context(format!("Failed to write {}", path.display()))?;
    }
    let updates = patch
        .changes
        .into_iter()
        .map(|change| DirectiveUpdate {
            path: path.to_path_buf(),
            line: change.line,
            kind: change.kind,
            from: change.from,
            to: change.to,
        })
        .collect();
    Ok(FilePatch {
        updates,
        modified: true,
    })
}
