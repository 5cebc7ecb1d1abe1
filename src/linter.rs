use std::fmt;
use std::path::Path;
use std::str::FromStr;

use rayon::prelude::*;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{FqLintError, Result};
use crate::reader::{FastqReader, PairedFastqReader};
use crate::record::FastqRead;
use crate::validators::{ValidationLevel, ValidationReport, ValidatorSet};

/// Records validated per parallel batch.
const BATCH_SIZE: usize = 4096;

/// What to do when a read fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LintMode {
    /// Stop at the first failing record or pair.
    #[default]
    Error,
    /// Record every violation and keep reading.
    Report,
}

impl FromStr for LintMode {
    type Err = FqLintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "report" => Ok(Self::Report),
            _ => Err(FqLintError::InvalidLintMode(s.to_string())),
        }
    }
}

impl fmt::Display for LintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Report => "report",
        };
        f.write_str(name)
    }
}

impl Serialize for LintMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LintMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// One failed validator outcome, located in its source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Display name of the offending file.
    pub file: String,
    /// Line number of the record's last field.
    pub line: u64,
    /// Name of the offending read.
    pub readname: String,
    /// Code of the validator that failed.
    pub code: &'static str,
    /// The validator's failure message.
    pub message: String,
}

impl Violation {
    /// The long form used when a run stops at its first failure.
    #[must_use]
    pub fn detailed(&self) -> String {
        format!(
            "Read '{}' failed validation in file {} for the following reason: {}",
            self.readname, self.file, self.message
        )
    }
}

impl fmt::Display for Violation {
    /// The grep-style report line: `file:code:line: message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.file, self.code, self.line, self.message
        )
    }
}

/// Aggregate result of linting one file or one file pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintSummary {
    /// Records read, across both files for a paired run.
    pub reads: u64,
    /// Mate pairs read; zero for single-file runs.
    pub pairs: u64,
    pub violations: Vec<Violation>,
}

impl LintSummary {
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Drives FASTQ readers through a validator set.
///
/// Records are validated in batches so independent records run in
/// parallel; violations are emitted in input order regardless.
pub struct Linter {
    validators: ValidatorSet,
    single_level: ValidationLevel,
    paired_level: ValidationLevel,
    mode: LintMode,
}

impl Linter {
    #[must_use]
    pub const fn new(
        validators: ValidatorSet,
        single_level: ValidationLevel,
        paired_level: ValidationLevel,
        mode: LintMode,
    ) -> Self {
        Self {
            validators,
            single_level,
            paired_level,
            mode,
        }
    }

    #[must_use]
    pub const fn validators(&self) -> &ValidatorSet {
        &self.validators
    }

    #[must_use]
    pub const fn single_level(&self) -> ValidationLevel {
        self.single_level
    }

    #[must_use]
    pub const fn paired_level(&self) -> ValidationLevel {
        self.paired_level
    }

    #[must_use]
    pub const fn mode(&self) -> LintMode {
        self.mode
    }

    /// Lints a single FASTQ file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read. Failing
    /// validation is not an error; it is reported in the summary.
    pub fn lint_file(&self, path: &Path) -> Result<LintSummary> {
        let mut reader = FastqReader::from_path(path)?;
        self.lint_reader(&mut reader)
    }

    /// Lints records from an already-open reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails.
    pub fn lint_reader(&self, reader: &mut FastqReader) -> Result<LintSummary> {
        let mut summary = LintSummary::default();
        let mut batch: Vec<(u64, FastqRead)> = Vec::with_capacity(BATCH_SIZE);

        loop {
            let fill_result = fill_batch(reader, &mut batch);

            let reports: Vec<ValidationReport> = batch
                .par_iter()
                .map(|(_, read)| self.validators.validate_read(read, self.single_level))
                .collect();

            for ((line, read), report) in batch.iter().zip(&reports) {
                summary.reads += 1;
                collect_violations(reader.name(), *line, read, report, &mut summary.violations);

                if self.mode == LintMode::Error && summary.has_violations() {
                    summary.violations.truncate(1);
                    return Ok(summary);
                }
            }

            // A violation in the batch outranks the read error behind it.
            fill_result?;

            if batch.len() < BATCH_SIZE {
                break;
            }
        }

        Ok(summary)
    }

    /// Lints two FASTQ files as mate pairs.
    ///
    /// Each side is validated with the single-read catalog and every
    /// pair with the paired catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be opened or read, or if
    /// one file ends before the other.
    pub fn lint_pair(&self, read_one: &Path, read_two: &Path) -> Result<LintSummary> {
        let mut reader = PairedFastqReader::from_paths(read_one, read_two)?;
        self.lint_paired_reader(&mut reader)
    }

    /// Lints mate pairs from an already-open paired reader.
    ///
    /// # Errors
    ///
    /// Same contract as [`Linter::lint_pair`].
    pub fn lint_paired_reader(&self, reader: &mut PairedFastqReader) -> Result<LintSummary> {
        let mut summary = LintSummary::default();
        let mut batch: Vec<PairItem> = Vec::with_capacity(BATCH_SIZE);

        loop {
            let fill_result = fill_pair_batch(reader, &mut batch);

            let reports: Vec<PairReports> = batch
                .par_iter()
                .map(|item| PairReports {
                    one: self.validators.validate_read(&item.one, self.single_level),
                    two: self.validators.validate_read(&item.two, self.single_level),
                    pair: self
                        .validators
                        .validate_pair(&item.one, &item.two, self.paired_level),
                })
                .collect();

            let name_one = reader.reader_one().name();
            let name_two = reader.reader_two().name();

            for (item, reports) in batch.iter().zip(&reports) {
                summary.reads += 2;
                summary.pairs += 1;

                collect_violations(
                    name_one,
                    item.line_one,
                    &item.one,
                    &reports.one,
                    &mut summary.violations,
                );
                collect_violations(
                    name_two,
                    item.line_two,
                    &item.two,
                    &reports.two,
                    &mut summary.violations,
                );
                // A pair failure is charged to both files.
                collect_violations(
                    name_one,
                    item.line_one,
                    &item.one,
                    &reports.pair,
                    &mut summary.violations,
                );
                collect_violations(
                    name_two,
                    item.line_two,
                    &item.two,
                    &reports.pair,
                    &mut summary.violations,
                );

                if self.mode == LintMode::Error && summary.has_violations() {
                    summary.violations.truncate(1);
                    return Ok(summary);
                }
            }

            // A violation in the batch outranks the read error behind it.
            fill_result?;

            if batch.len() < BATCH_SIZE {
                break;
            }
        }

        Ok(summary)
    }
}

struct PairItem {
    line_one: u64,
    line_two: u64,
    one: FastqRead,
    two: FastqRead,
}

struct PairReports {
    one: ValidationReport,
    two: ValidationReport,
    pair: ValidationReport,
}

fn fill_batch(reader: &mut FastqReader, batch: &mut Vec<(u64, FastqRead)>) -> Result<()> {
    batch.clear();
    while batch.len() < BATCH_SIZE {
        match reader.read_next()? {
            Some(read) => batch.push((reader.line_number(), read)),
            None => break,
        }
    }
    Ok(())
}

fn fill_pair_batch(reader: &mut PairedFastqReader, batch: &mut Vec<PairItem>) -> Result<()> {
    batch.clear();
    while batch.len() < BATCH_SIZE {
        match reader.read_next()? {
            Some((one, two)) => batch.push(PairItem {
                line_one: reader.reader_one().line_number(),
                line_two: reader.reader_two().line_number(),
                one,
                two,
            }),
            None => break,
        }
    }
    Ok(())
}

fn collect_violations(
    file: &str,
    line: u64,
    read: &FastqRead,
    report: &ValidationReport,
    violations: &mut Vec<Violation>,
) {
    for entry in report.failures() {
        if let Some(message) = entry.outcome.message() {
            violations.push(Violation {
                file: file.to_string(),
                line,
                readname: read.name.clone(),
                code: entry.code,
                message: message.to_string(),
            });
        }
    }
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
