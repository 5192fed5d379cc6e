mod append_patch_log;
mod display_update;
mod find_build_files;
mod get_cmakefix_config;
mod get_relative_path;

pub use append_patch_log::append_patch_log;
pub use display_update::{display_no_changes, display_skipped, display_update, display_updated};
pub use find_build_files::{check_root, compile_ignore_patterns, find_build_files};
pub use get_cmakefix_config::{CONFIG_DIR, CONFIG_FILE, get_cmakefix_config, get_cmakefix_dir};
pub use get_relative_path::get_relative_path;
