use std::{fmt::Write as _, path::PathBuf};

use chrono::{DateTime, Local};

/// Literal marker in the header line of every run block.
pub const RUN_MARKER: &str = "CMake Patch Run";

/// One block of the append-only run log: a timestamp and the files modified in that run.
#[derive(Debug, Clone)]
pub struct PatchLog {
    date: DateTime<Local>,
    paths: Vec<PathBuf>,
}

impl PatchLog {
    #[must_use]
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self::with_date(paths, Local::now())
    }

    #[must_use]
    pub const fn with_date(paths: Vec<PathBuf>, date: DateTime<Local>) -> Self {
        Self { date, paths }
    }

    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    #[must_use]
    pub const fn date(&self) -> &DateTime<Local> {
        &self.date
    }

    /// Text appended to the log file: a blank line, the header, then one path per line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut block = format!(
            "\n--- {RUN_MARKER} @ {} ---\n",
            self.date.format("%Y-%m-%d %H:%M:%S%.6f")
        );
        for path in &self.paths {
            let _ = writeln!(block, "{}", path.display());
        }
        block
    }
}
