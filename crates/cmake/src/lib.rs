//! # cmakefix-cmake
//!
//! CMake support for cmakefix.
//!
//! Recognises `cmake_minimum_required(VERSION ..)` and `cmake_policy(VERSION ..)` at the start
//! of a line, and rewrites versions below the configured minimum in place. Only the version
//! token changes; casing, spacing, trailing arguments and comments are left as written.

pub mod finder;
pub mod matcher;
pub mod patcher;

pub use finder::{CMAKE_LISTS_FILE, CMakeListsFinder};
pub use matcher::{match_line, split_range};
pub use patcher::{ContentPatch, FilePatch, LineChange, patch_content, patch_file};
