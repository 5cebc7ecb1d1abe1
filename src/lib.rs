pub mod cli;
pub mod config;
pub mod error;
pub mod linter;
pub mod output;
pub mod reader;
pub mod record;
pub mod validators;

pub use error::{FqLintError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
