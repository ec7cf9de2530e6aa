use std::fs;

use tempfile::TempDir;
use wordfreq_engine::{load, LoadError};

#[test]
fn reads_whole_file_as_text() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("corpus.txt");
    fs::write(&path, "line one\nline two\n").unwrap();

    assert_eq!(load(&path).unwrap(), "line one\nline two\n");
}

#[test]
fn empty_file_loads_as_empty_text() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    assert_eq!(load(&path).unwrap(), "");
}

#[test]
fn missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.txt");

    let err = load(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn directory_is_an_io_error() {
    let temp = TempDir::new().unwrap();

    let err = load(temp.path()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn malformed_bytes_are_a_decode_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("latin1.txt");
    fs::write(&path, [b'c', b'a', b'f', 0xE9]).unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }));
}
