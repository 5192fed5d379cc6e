use clap::ValueEnum;

/// CLI output format selection.
///
/// Controls whether commands print human-readable status lines or one JSON report for CI integration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatOptions {
    /// JSON format for CI/CD pipelines
    #[value(name = "json")]
    Json,
    /// Human-readable colored terminal output
    #[default]
    #[value(name = "stdout")]
    Stdout,
}

impl FormatOptions {
    /// Print a status line; suppressed in JSON mode so stdout stays a single document.
    pub fn status(&self, stdout_msg: &str) {
        if matches!(self, Self::Stdout) {
            println!("{stdout_msg}");
        }
    }

    /// Print a warning to stderr; suppressed in JSON mode, where warnings are part of the report.
    pub fn warn(&self, stderr_msg: &str) {
        if matches!(self, Self::Stdout) {
            eprintln!("{stderr_msg}");
        }
    }

    pub fn print(&self, stdout_msg: &str, json_msg: &str) {
        match self {
            Self::Stdout => println!("{stdout_msg}"),
            Self::Json => println!("{json_msg}"),
        }
    }
}
