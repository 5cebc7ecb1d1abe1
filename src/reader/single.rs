use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{FqLintError, Result};
use crate::record::FastqRead;

/// Streams FASTQ records from a buffered source.
///
/// Records are read four lines at a time with trailing line endings
/// stripped. Iteration ends at a missing or blank name line. A record
/// truncated by end of input is returned with the missing fields left
/// empty, so the completeness rule can report it instead of the reader
/// guessing at intent.
pub struct FastqReader {
    source: Box<dyn BufRead>,
    name: String,
    line: u64,
}

impl std::fmt::Debug for FastqReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastqReader")
            .field("name", &self.name)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}

impl FastqReader {
    /// Opens a FASTQ file, transparently decoding gzip for `.gz` paths.
    ///
    /// # Errors
    ///
    /// Returns [`FqLintError::FileRead`] if the file cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| FqLintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let source: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        Ok(Self {
            source,
            name,
            line: 0,
        })
    }

    /// Wraps an already-open source, with `name` used for locations.
    pub fn from_reader(reader: impl BufRead + 'static, name: impl Into<String>) -> Self {
        Self {
            source: Box::new(reader),
            name: name.into(),
            line: 0,
        }
    }

    /// Display name used in violation locations.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lines consumed so far. After `read_next` returns a record, this
    /// is the line number of that record's last field.
    #[must_use]
    pub const fn line_number(&self) -> u64 {
        self.line
    }

    /// Reads the next record. `Ok(None)` at end of input.
    ///
    /// The reader does not validate: malformed records are returned
    /// as-is for the validators to judge.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails.
    pub fn read_next(&mut self) -> Result<Option<FastqRead>> {
        let Some(name) = self.next_line()? else {
            return Ok(None);
        };
        if name.is_empty() {
            return Ok(None);
        }

        let sequence = self.next_line()?.unwrap_or_default();
        let plusline = self.next_line()?.unwrap_or_default();
        let quality = self.next_line()?.unwrap_or_default();

        Ok(Some(FastqRead::new(name, sequence, plusline, quality)))
    }

    /// Reads one line with the trailing `\n` (and `\r` for CRLF input)
    /// stripped. `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.source.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }

        Ok(Some(line))
    }
}

impl Iterator for FastqReader {
    type Item = Result<FastqRead>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}

#[cfg(test)]
#[path = "single_tests.rs"]
mod tests;
