use std::io::Cursor;

use datapick_cli::pipeline::{LoadOptions, list_candidates, load_dataset};
use tempfile::TempDir;

fn create_study_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("alpha.csv"), "a,b,c\n1,2,3\n4,5,6\n").unwrap();
    std::fs::write(dir.path().join("beta.csv"), "x,y\n1,\n2,hi\n").unwrap();
    dir
}

fn no_input() -> Cursor<&'static [u8]> {
    Cursor::new(&b""[..])
}

#[test]
fn test_load_with_explicit_selection() {
    let dir = create_study_dir();
    let options = LoadOptions {
        select: Some(1),
        ..LoadOptions::new(dir.path())
    };

    let frame = load_dataset(&options, &mut no_input()).unwrap();

    assert_eq!(frame.height(), 2);
    assert_eq!(frame.width(), 3);
}

#[test]
fn test_selection_resolves_by_sorted_file_name() {
    let dir = create_study_dir();
    let options = LoadOptions {
        select: Some(2),
        ..LoadOptions::new(dir.path())
    };

    let frame = load_dataset(&options, &mut no_input()).unwrap();

    // beta.csv sorts second
    assert_eq!(frame.width(), 2);
}

#[test]
fn test_out_of_range_selection_fails() {
    let dir = create_study_dir();
    let options = LoadOptions {
        select: Some(3),
        ..LoadOptions::new(dir.path())
    };

    assert!(load_dataset(&options, &mut no_input()).is_none());
}

#[test]
fn test_empty_directory_fails_without_prompting() {
    let dir = TempDir::new().unwrap();
    let options = LoadOptions::new(dir.path());

    // An empty input stream would error if the prompt were reached.
    assert!(load_dataset(&options, &mut no_input()).is_none());
}

#[test]
fn test_interactive_selection_retries_until_valid() {
    let dir = create_study_dir();
    let options = LoadOptions::new(dir.path());
    let mut input = Cursor::new(&b"abc\n0\n9\n2\n"[..]);

    let frame = load_dataset(&options, &mut input).unwrap();

    assert_eq!(frame.width(), 2);
}

#[test]
fn test_interactive_eof_fails() {
    let dir = create_study_dir();
    let options = LoadOptions::new(dir.path());

    assert!(load_dataset(&options, &mut no_input()).is_none());
}

#[test]
fn test_malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.csv"), "a,b\n1,2\n3,4,5\n").unwrap();
    let options = LoadOptions {
        select: Some(1),
        ..LoadOptions::new(dir.path())
    };

    assert!(load_dataset(&options, &mut no_input()).is_none());
}

#[test]
fn test_load_is_idempotent() {
    let dir = create_study_dir();
    let options = LoadOptions {
        select: Some(1),
        ..LoadOptions::new(dir.path())
    };

    let first = load_dataset(&options, &mut no_input()).unwrap();
    let second = load_dataset(&options, &mut no_input()).unwrap();

    assert_eq!(first.height(), second.height());
    assert_eq!(first.get_column_names(), second.get_column_names());
}

#[test]
fn test_list_candidates() {
    let dir = create_study_dir();

    assert!(list_candidates(dir.path(), false).unwrap());
    assert!(list_candidates(dir.path(), true).unwrap());

    let empty = TempDir::new().unwrap();
    assert!(!list_candidates(empty.path(), false).unwrap());
}
