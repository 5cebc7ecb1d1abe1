#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the fqlint binary.
#[macro_export]
macro_rules! fqlint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("fqlint"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a gzip-compressed file with the given content.
    pub fn create_gz_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        let file = fs::File::create(&path).expect("Failed to create gz file");
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(content.as_bytes())
            .expect("Failed to write gz data");
        encoder.finish().expect("Failed to finish gz stream");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic fqlint config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".fqlint.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds one four-line FASTQ record with a quality run matching the
/// sequence length.
pub fn record(name: &str, sequence: &str) -> String {
    format!("{name}\n{sequence}\n+\n{}\n", "I".repeat(sequence.len()))
}

/// Two well-formed reads.
pub fn clean_fastq() -> String {
    format!(
        "{}{}",
        record("@read1", "ACGTACGT"),
        record("@read2", "TTGACCAN")
    )
}

/// Config that collects every violation instead of stopping.
pub const REPORT_CONFIG: &str = r#"
[validation]
single_level = "low"
paired_level = "low"
mode = "report"
"#;

/// Config that runs the whole catalog.
pub const HIGH_LEVEL_CONFIG: &str = r#"
[validation]
single_level = "high"
paired_level = "high"
mode = "report"
"#;
