use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::directive::DirectiveKind;

/// One directive rewritten (or, in a dry run, due to be rewritten).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveUpdate {
    /// File containing the directive
    pub path: PathBuf,
    /// Zero-based line index
    pub line: usize,
    pub kind: DirectiveKind,
    /// Version text before the rewrite
    pub from: String,
    /// Version text after the rewrite
    pub to: String,
}

/// A qualifying file that could not be processed and was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedFile {
    #[must_use]
    pub fn new(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Result of one walk over the tree, also the JSON document printed by `--format json`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchReport {
    /// Number of qualifying files found
    pub visited: usize,
    /// Modified files in visiting order, each listed once
    pub modified: Vec<PathBuf>,
    pub updates: Vec<DirectiveUpdate>,
    pub skipped: Vec<SkippedFile>,
    pub dry_run: bool,
}

impl PatchReport {
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Record a modified file; repeated paths are kept once.
    pub fn add_modified(&mut self, path: &Path) {
        if !self.modified.iter().any(|p| p == path) {
            self.modified.push(path.to_path_buf());
        }
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.modified.is_empty()
    }
}
