use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FqLintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown validation level: {0}")]
    InvalidLevel(String),

    #[error("Unknown lint mode: {0}")]
    InvalidLintMode(String),

    #[error("Duplicate validator code: {0}")]
    DuplicateValidatorCode(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unpaired read: {path} ended before its mate file")]
    UnpairedRead { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl FqLintError {
    /// A short actionable hint for the user, when one exists.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check the configuration file format and values"),
            Self::InvalidLevel(_) => {
                Some("Valid validation levels are \"minimum\", \"low\", and \"high\"")
            }
            Self::InvalidLintMode(_) => Some("Valid lint modes are \"error\" and \"report\""),
            Self::UnpairedRead { .. } => {
                Some("Paired FASTQ files must contain the same number of reads")
            }
            Self::TomlParse(_) => Some("Check the TOML syntax in the configuration file"),
            Self::FileRead { source, .. } => io_suggestion(source),
            Self::Io(source) => io_suggestion(source),
            _ => None,
        }
    }
}

fn io_suggestion(source: &std::io::Error) -> Option<&'static str> {
    match source.kind() {
        std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
        std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, FqLintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
