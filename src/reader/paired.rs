use std::path::Path;

use crate::error::{FqLintError, Result};
use crate::record::FastqRead;

use super::FastqReader;

/// Steps two FASTQ readers in lockstep, yielding mate pairs.
#[derive(Debug)]
pub struct PairedFastqReader {
    read_one: FastqReader,
    read_two: FastqReader,
}

impl PairedFastqReader {
    /// Opens both mate files.
    ///
    /// # Errors
    ///
    /// Returns [`FqLintError::FileRead`] if either file cannot be opened.
    pub fn from_paths(read_one: &Path, read_two: &Path) -> Result<Self> {
        Ok(Self {
            read_one: FastqReader::from_path(read_one)?,
            read_two: FastqReader::from_path(read_two)?,
        })
    }

    #[must_use]
    pub const fn new(read_one: FastqReader, read_two: FastqReader) -> Self {
        Self { read_one, read_two }
    }

    #[must_use]
    pub const fn reader_one(&self) -> &FastqReader {
        &self.read_one
    }

    #[must_use]
    pub const fn reader_two(&self) -> &FastqReader {
        &self.read_two
    }

    /// Reads the next mate pair. `Ok(None)` when both sources end on
    /// the same record.
    ///
    /// # Errors
    ///
    /// Returns [`FqLintError::UnpairedRead`] naming the shorter file
    /// when one source ends before the other: every read must have a
    /// mate. Read failures from either source are passed through.
    pub fn read_next(&mut self) -> Result<Option<(FastqRead, FastqRead)>> {
        let one = self.read_one.read_next()?;
        let two = self.read_two.read_next()?;

        match (one, two) {
            (Some(one), Some(two)) => Ok(Some((one, two))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(FqLintError::UnpairedRead {
                path: self.read_two.name().into(),
            }),
            (None, Some(_)) => Err(FqLintError::UnpairedRead {
                path: self.read_one.name().into(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "paired_tests.rs"]
mod tests;
