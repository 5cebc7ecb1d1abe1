use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FqLintError, Result};
use crate::linter::LintMode;
use crate::validators::ValidationLevel;

/// Configuration file discovered in the working directory.
pub const LOCAL_CONFIG_NAME: &str = ".fqlint.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Validation knobs: which levels are enforced and what happens on a
/// failing read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Level for single-read validators.
    #[serde(default = "default_level")]
    pub single_level: ValidationLevel,

    /// Level for paired-read validators.
    #[serde(default = "default_level")]
    pub paired_level: ValidationLevel,

    /// Stop at the first failure (`error`) or collect everything
    /// (`report`).
    #[serde(default)]
    pub mode: LintMode,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            single_level: default_level(),
            paired_level: default_level(),
            mode: LintMode::default(),
        }
    }
}

const fn default_level() -> ValidationLevel {
    ValidationLevel::Low
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let path = Path::new(LOCAL_CONFIG_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        self.load_from_path(path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(FqLintError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|source| FqLintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
