use std::io::Cursor;

use super::*;

fn paired(one: &str, two: &str) -> PairedFastqReader {
    PairedFastqReader::new(
        FastqReader::from_reader(Cursor::new(one.to_string()), "r1.fastq"),
        FastqReader::from_reader(Cursor::new(two.to_string()), "r2.fastq"),
    )
}

#[test]
fn reads_pairs_in_lockstep() {
    let mut reader = paired(
        "@a/1\nACGT\n+\nIIII\n@b/1\nTTTT\n+\nJJJJ\n",
        "@a/2\nCCCC\n+\nKKKK\n@b/2\nGGGG\n+\nLLLL\n",
    );

    let (one, two) = reader.read_next().unwrap().unwrap();
    assert_eq!(one.name, "@a");
    assert_eq!(two.name, "@a");
    assert_eq!(two.sequence, "CCCC");

    let (one, _) = reader.read_next().unwrap().unwrap();
    assert_eq!(one.name, "@b");

    assert!(reader.read_next().unwrap().is_none());
}

#[test]
fn line_numbers_track_each_side() {
    let mut reader = paired("@a\nACGT\n+\nIIII\n", "@a\nCCCC\n+\nKKKK\n");
    reader.read_next().unwrap().unwrap();
    assert_eq!(reader.reader_one().line_number(), 4);
    assert_eq!(reader.reader_two().line_number(), 4);
}

#[test]
fn second_file_ending_early_is_unpaired() {
    let mut reader = paired(
        "@a\nACGT\n+\nIIII\n@b\nTTTT\n+\nJJJJ\n",
        "@a\nCCCC\n+\nKKKK\n",
    );
    reader.read_next().unwrap().unwrap();

    let err = reader.read_next().unwrap_err();
    match err {
        FqLintError::UnpairedRead { path } => {
            assert_eq!(path, std::path::PathBuf::from("r2.fastq"));
        }
        other => panic!("Expected UnpairedRead, got {other:?}"),
    }
}

#[test]
fn first_file_ending_early_is_unpaired() {
    let mut reader = paired(
        "@a\nACGT\n+\nIIII\n",
        "@a\nCCCC\n+\nKKKK\n@b\nGGGG\n+\nLLLL\n",
    );
    reader.read_next().unwrap().unwrap();

    let err = reader.read_next().unwrap_err();
    match err {
        FqLintError::UnpairedRead { path } => {
            assert_eq!(path, std::path::PathBuf::from("r1.fastq"));
        }
        other => panic!("Expected UnpairedRead, got {other:?}"),
    }
}

#[test]
fn both_sources_empty_is_end_of_input() {
    let mut reader = paired("", "");
    assert!(reader.read_next().unwrap().is_none());
}

#[test]
fn from_paths_missing_file_is_file_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let r1 = dir.path().join("r1.fastq");
    std::fs::write(&r1, "@a\nACGT\n+\nIIII\n").unwrap();
    let r2 = dir.path().join("missing.fastq");

    let err = PairedFastqReader::from_paths(&r1, &r2).unwrap_err();
    assert!(matches!(err, FqLintError::FileRead { .. }));
}
