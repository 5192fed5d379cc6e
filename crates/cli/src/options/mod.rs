mod config_options;
mod format_options;

pub use config_options::ConfigOptions;
pub use format_options::FormatOptions;
