use indexmap::IndexMap;

use crate::error::{FqLintError, Result};
use crate::record::FastqRead;

use super::level::ValidationLevel;
use super::outcome::{ReportEntry, ValidationReport};
use super::paired::PairedReadnameValidator;
use super::single::{
    AlphabetValidator, CompleteReadValidator, PluslineValidator, ReadnameValidator,
};
use super::{PairedReadValidator, SingleReadValidator};

/// The validator catalog and the runner that applies it.
///
/// Validators are kept in registration order, keyed by code. A run is
/// pure aggregation: every validator selected by the level filter is
/// applied exactly once, and one failure never short-circuits the
/// validators after it. Reports list outcomes in catalog order, so the
/// same input always produces the same report.
pub struct ValidatorSet {
    single: IndexMap<&'static str, Box<dyn SingleReadValidator>>,
    paired: IndexMap<&'static str, Box<dyn PairedReadValidator>>,
}

impl Default for ValidatorSet {
    /// The built-in catalog, in code order.
    fn default() -> Self {
        let mut set = Self::empty();
        set.register_single(Box::new(PluslineValidator))
            .expect("Duplicate built-in validator code");
        set.register_single(Box::new(AlphabetValidator::new()))
            .expect("Duplicate built-in validator code");
        set.register_single(Box::new(ReadnameValidator))
            .expect("Duplicate built-in validator code");
        set.register_single(Box::new(CompleteReadValidator))
            .expect("Duplicate built-in validator code");
        set.register_paired(Box::new(PairedReadnameValidator))
            .expect("Duplicate built-in validator code");
        set
    }
}

impl ValidatorSet {
    /// A set with no validators registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            single: IndexMap::new(),
            paired: IndexMap::new(),
        }
    }

    /// Registers a single-read validator at the end of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`FqLintError::DuplicateValidatorCode`] if the code is
    /// already taken, by either a single-read or a paired-read
    /// validator. Codes are stable identifiers and must never collide.
    pub fn register_single(&mut self, validator: Box<dyn SingleReadValidator>) -> Result<()> {
        let code = validator.code();
        self.check_code_free(code)?;
        self.single.insert(code, validator);
        Ok(())
    }

    /// Registers a paired-read validator at the end of the catalog.
    ///
    /// # Errors
    ///
    /// Same contract as [`ValidatorSet::register_single`].
    pub fn register_paired(&mut self, validator: Box<dyn PairedReadValidator>) -> Result<()> {
        let code = validator.code();
        self.check_code_free(code)?;
        self.paired.insert(code, validator);
        Ok(())
    }

    fn check_code_free(&self, code: &'static str) -> Result<()> {
        if self.single.contains_key(code) || self.paired.contains_key(code) {
            return Err(FqLintError::DuplicateValidatorCode(code.to_string()));
        }
        Ok(())
    }

    /// Applies every single-read validator active at `level` to a read.
    #[must_use]
    pub fn validate_read(&self, read: &FastqRead, level: ValidationLevel) -> ValidationReport {
        let entries = self
            .single
            .values()
            .filter(|validator| validator.level() <= level)
            .map(|validator| ReportEntry {
                code: validator.code(),
                outcome: validator.validate(read),
            })
            .collect();

        ValidationReport::new(entries)
    }

    /// Applies every paired-read validator active at `level` to a pair.
    #[must_use]
    pub fn validate_pair(
        &self,
        read_one: &FastqRead,
        read_two: &FastqRead,
        level: ValidationLevel,
    ) -> ValidationReport {
        let entries = self
            .paired
            .values()
            .filter(|validator| validator.level() <= level)
            .map(|validator| ReportEntry {
                code: validator.code(),
                outcome: validator.validate(read_one, read_two),
            })
            .collect();

        ValidationReport::new(entries)
    }

    /// Codes of single-read validators active at `level`, in catalog order.
    #[must_use]
    pub fn single_codes(&self, level: ValidationLevel) -> Vec<&'static str> {
        self.single
            .values()
            .filter(|validator| validator.level() <= level)
            .map(|validator| validator.code())
            .collect()
    }

    /// Codes of paired-read validators active at `level`, in catalog order.
    #[must_use]
    pub fn paired_codes(&self, level: ValidationLevel) -> Vec<&'static str> {
        self.paired
            .values()
            .filter(|validator| validator.level() <= level)
            .map(|validator| validator.code())
            .collect()
    }

    /// All registered single-read validators, in catalog order.
    pub fn single_validators(&self) -> impl Iterator<Item = &dyn SingleReadValidator> {
        self.single.values().map(|validator| validator.as_ref())
    }

    /// All registered paired-read validators, in catalog order.
    pub fn paired_validators(&self) -> impl Iterator<Item = &dyn PairedReadValidator> {
        self.paired.values().map(|validator| validator.as_ref())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
