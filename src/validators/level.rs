use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{FqLintError, Result};

/// How strictly reads are validated.
///
/// Levels are totally ordered: `Minimum < Low < High`. A validator runs
/// when its own level is at or below the configured level, so raising
/// the configured level enables more validators and `High` runs the
/// whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationLevel {
    /// Cheapest structural checks only.
    Minimum,
    /// Structural plus content checks.
    Low,
    /// The full catalog.
    High,
}

/// A level as it arrives from callers: already resolved, or text that
/// still needs parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelInput {
    Resolved(ValidationLevel),
    Text(String),
}

impl From<ValidationLevel> for LevelInput {
    fn from(level: ValidationLevel) -> Self {
        Self::Resolved(level)
    }
}

impl From<&str> for LevelInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LevelInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl ValidationLevel {
    /// Resolves a loosely-typed input to a level.
    ///
    /// An already-resolved level passes through unchanged. Text is
    /// parsed case-insensitively; the empty string resolves to
    /// [`ValidationLevel::Minimum`].
    ///
    /// # Errors
    ///
    /// Returns [`FqLintError::InvalidLevel`] for unrecognized text.
    pub fn resolve(input: impl Into<LevelInput>) -> Result<Self> {
        match input.into() {
            LevelInput::Resolved(level) => Ok(level),
            LevelInput::Text(text) => text.parse(),
        }
    }
}

impl FromStr for ValidationLevel {
    type Err = FqLintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            // An unset level means "validate minimally".
            "minimum" | "" => Ok(Self::Minimum),
            _ => Err(FqLintError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Minimum => "minimum",
            Self::Low => "low",
            Self::High => "high",
        };
        // pad() keeps width specifiers working in aligned listings.
        f.pad(name)
    }
}

impl Serialize for ValidationLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ValidationLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[path = "level_tests.rs"]
mod tests;
