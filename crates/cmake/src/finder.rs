use anyhow::Result;
use async_trait::async_trait;
use cmakefix_core::BuildFileFinder;
use std::path::{Path, PathBuf};
use tokio::fs::metadata;

pub const CMAKE_LISTS_FILE: &str = "CMakeLists.txt";

#[derive(Debug)]
pub struct CMakeListsFinder {
    build_files: Vec<PathBuf>,
    file_names: Vec<String>,
}

impl Default for CMakeListsFinder {
    fn default() -> Self {
        Self::new(CMAKE_LISTS_FILE)
    }
}

impl CMakeListsFinder {
    pub fn new(file_name: &str) -> Self {
        Self {
            build_files: Vec::new(),
            file_names: vec![file_name.to_string()],
        }
    }
}

#[async_trait]
impl BuildFileFinder for CMakeListsFinder {
    fn build_files(&self) -> &[PathBuf] {
        &self.build_files
    }

    fn file_names(&self) -> &[String] {
        &self.file_names
    }

    async fn visit(&mut self, path: &Path) -> Result<()> {
        if !self.is_build_file(path) || self.build_files.iter().any(|p| p == path) {
            return Ok(());
        }
        if metadata(path).await.is_ok_and(|m| m.is_file()) {
            self.build_files.push(path.to_path_buf());
        }
        Ok(())
    }
}
