use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = FqLintError::Config("invalid level".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid level");
}

#[test]
fn error_display_invalid_level() {
    let err = FqLintError::InvalidLevel("severe".to_string());
    assert_eq!(err.to_string(), "Unknown validation level: severe");
}

#[test]
fn error_display_invalid_lint_mode() {
    let err = FqLintError::InvalidLintMode("panic".to_string());
    assert_eq!(err.to_string(), "Unknown lint mode: panic");
}

#[test]
fn error_display_duplicate_validator_code() {
    let err = FqLintError::DuplicateValidatorCode("S001".to_string());
    assert_eq!(err.to_string(), "Duplicate validator code: S001");
}

#[test]
fn error_display_file_read() {
    let err = FqLintError::FileRead {
        path: PathBuf::from("reads.fastq"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("reads.fastq"));
}

#[test]
fn error_display_unpaired_read() {
    let err = FqLintError::UnpairedRead {
        path: PathBuf::from("r2.fastq"),
    };
    assert_eq!(
        err.to_string(),
        "Unpaired read: r2.fastq ended before its mate file"
    );
}

#[test]
fn suggestion_config_error() {
    let err = FqLintError::Config("bad value".to_string());
    let suggestion = err.suggestion().unwrap();
    assert!(suggestion.contains("configuration file"));
}

#[test]
fn suggestion_invalid_level_names_valid_levels() {
    let err = FqLintError::InvalidLevel("severe".to_string());
    let suggestion = err.suggestion().unwrap();
    assert!(suggestion.contains("minimum"));
    assert!(suggestion.contains("low"));
    assert!(suggestion.contains("high"));
}

#[test]
fn suggestion_invalid_lint_mode_names_valid_modes() {
    let err = FqLintError::InvalidLintMode("panic".to_string());
    let suggestion = err.suggestion().unwrap();
    assert!(suggestion.contains("error"));
    assert!(suggestion.contains("report"));
}

#[test]
fn suggestion_file_read_not_found() {
    let err = FqLintError::FileRead {
        path: PathBuf::from("missing.fastq"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    let suggestion = err.suggestion().unwrap();
    assert!(suggestion.contains("file path exists"));
}

#[test]
fn suggestion_file_read_permission_denied() {
    let err = FqLintError::FileRead {
        path: PathBuf::from("protected.fastq"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
    };
    let suggestion = err.suggestion().unwrap();
    assert!(suggestion.contains("permissions"));
}

#[test]
fn suggestion_file_read_other_error_has_none() {
    let err = FqLintError::FileRead {
        path: PathBuf::from("unknown.fastq"),
        source: std::io::Error::other("unknown error"),
    };
    assert!(err.suggestion().is_none());
}

#[test]
fn suggestion_io_error_not_found() {
    let err = FqLintError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "not found",
    ));
    let suggestion = err.suggestion().unwrap();
    assert!(suggestion.contains("file path exists"));
}

#[test]
fn suggestion_unpaired_read() {
    let err = FqLintError::UnpairedRead {
        path: PathBuf::from("r1.fastq"),
    };
    let suggestion = err.suggestion().unwrap();
    assert!(suggestion.contains("same number of reads"));
}

#[test]
fn suggestion_toml_parse() {
    let toml_err: std::result::Result<toml::Value, _> = toml::from_str("invalid = [");
    let err = FqLintError::TomlParse(toml_err.unwrap_err());
    let suggestion = err.suggestion().unwrap();
    assert!(suggestion.contains("TOML syntax"));
}

#[test]
fn suggestion_duplicate_code_has_none() {
    let err = FqLintError::DuplicateValidatorCode("S001".to_string());
    assert!(err.suggestion().is_none());
}
