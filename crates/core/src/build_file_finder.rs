use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

/// Visitor for discovering qualifying build files while walking a directory tree.
///
/// The walker calls `visit` once per entry, in walking order. Implementations keep the
/// paths whose file name is one of `file_names`, in the order they were visited.
#[async_trait]
pub trait BuildFileFinder: std::fmt::Debug + Send + Sync {
    fn build_files(&self) -> &[PathBuf];
    fn file_names(&self) -> &[String];
    /// # Errors
    /// Returns error if the file visitation fails.
    async fn visit(&mut self, path: &Path) -> Result<()>;
    /// Whether `path` has one of the reserved file names.
    fn is_build_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.file_names().iter().any(|f| f == name))
    }
}
