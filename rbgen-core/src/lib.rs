//! Core utilities and types for rbgen.
//!
//! This crate provides fundamental types and utilities used across
//! the rbgen crates.

mod file;
mod settings;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Configuration
pub use settings::Settings;
// String utilities
pub use utils::{
    RUBY_KEYWORDS, constant_path_to_file_path, is_ruby_keyword, to_snake_case, validate_identifier,
};
