use crate::record::FastqRead;

use super::PairedReadValidator;
use super::level::ValidationLevel;
use super::outcome::Outcome;

/// P001: mate read names must be exactly equal.
///
/// Interleave suffixes are stripped at record construction, so
/// `@pair/1` and `@pair/2` compare equal here.
pub struct PairedReadnameValidator;

impl PairedReadnameValidator {
    pub const CODE: &'static str = "P001";
    pub const LEVEL: ValidationLevel = ValidationLevel::Low;
}

impl PairedReadValidator for PairedReadnameValidator {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn level(&self) -> ValidationLevel {
        Self::LEVEL
    }

    fn description(&self) -> &'static str {
        "Mate read names match"
    }

    fn validate(&self, read_one: &FastqRead, read_two: &FastqRead) -> Outcome {
        if read_one.name == read_two.name {
            Outcome::Pass
        } else {
            Outcome::Fail("Read names do not match.".to_string())
        }
    }
}
