use regex::Regex;

use crate::record::FastqRead;

use super::SingleReadValidator;
use super::level::ValidationLevel;
use super::outcome::Outcome;

/// S001: the plus line must be exactly `"+"`.
pub struct PluslineValidator;

impl PluslineValidator {
    pub const CODE: &'static str = "S001";
    pub const LEVEL: ValidationLevel = ValidationLevel::Minimum;
}

impl SingleReadValidator for PluslineValidator {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn level(&self) -> ValidationLevel {
        Self::LEVEL
    }

    fn description(&self) -> &'static str {
        "Plus line is exactly \"+\""
    }

    fn validate(&self, read: &FastqRead) -> Outcome {
        if read.plusline == "+" {
            Outcome::Pass
        } else {
            Outcome::Fail(
                "The plusline is not formatted correctly. It's possible this is a FastA file \
                 or that the reads are not correctly formed."
                    .to_string(),
            )
        }
    }
}

/// S002: the sequence may only contain `A`, `C`, `G`, `T`, or `N`, in
/// either case.
pub struct AlphabetValidator {
    non_acgtn: Regex,
}

impl AlphabetValidator {
    pub const CODE: &'static str = "S002";
    pub const LEVEL: ValidationLevel = ValidationLevel::Low;

    #[must_use]
    pub fn new() -> Self {
        Self {
            non_acgtn: Regex::new("[^ACGTNacgtn]").expect("Invalid regex"),
        }
    }
}

impl Default for AlphabetValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleReadValidator for AlphabetValidator {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn level(&self) -> ValidationLevel {
        Self::LEVEL
    }

    fn description(&self) -> &'static str {
        "Sequence contains only ACGTN bases"
    }

    fn validate(&self, read: &FastqRead) -> Outcome {
        if self.non_acgtn.is_match(&read.sequence) {
            Outcome::Fail(format!(
                "Non-ACTGN base found in sequence {}",
                read.sequence
            ))
        } else {
            Outcome::Pass
        }
    }
}

/// S003: the read name must start with the `@` sentinel.
pub struct ReadnameValidator;

impl ReadnameValidator {
    pub const CODE: &'static str = "S003";
    pub const LEVEL: ValidationLevel = ValidationLevel::High;
}

impl SingleReadValidator for ReadnameValidator {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn level(&self) -> ValidationLevel {
        Self::LEVEL
    }

    fn description(&self) -> &'static str {
        "Read name starts with \"@\""
    }

    fn validate(&self, read: &FastqRead) -> Outcome {
        if read.name.starts_with('@') {
            Outcome::Pass
        } else {
            Outcome::Fail("Read name must start with @".to_string())
        }
    }
}

/// S004: all four record fields must be present and non-empty.
pub struct CompleteReadValidator;

impl CompleteReadValidator {
    pub const CODE: &'static str = "S004";
    pub const LEVEL: ValidationLevel = ValidationLevel::Minimum;
}

impl SingleReadValidator for CompleteReadValidator {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn level(&self) -> ValidationLevel {
        Self::LEVEL
    }

    fn description(&self) -> &'static str {
        "All four record fields are non-empty"
    }

    fn validate(&self, read: &FastqRead) -> Outcome {
        let complete = !read.name.is_empty()
            && !read.sequence.is_empty()
            && !read.plusline.is_empty()
            && !read.quality.is_empty();

        if complete {
            Outcome::Pass
        } else {
            Outcome::Fail("Read is not complete.".to_string())
        }
    }
}

#[cfg(test)]
#[path = "single_tests.rs"]
mod tests;
