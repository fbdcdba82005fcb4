use datapick_ingest::{DatasetSummary, IngestError, read_csv_table};
use std::io::Write;
use tempfile::NamedTempFile;

fn create_temp_csv(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file
}

#[test]
fn test_utf8_table_shape_and_columns() {
    let file = create_temp_csv(b"a,b,c\n1,2,3\n4,5,6\n");

    let loaded = read_csv_table(file.path()).unwrap();

    assert_eq!(loaded.frame.height(), 2);
    assert_eq!(loaded.frame.width(), 3);
    let names: Vec<String> = loaded
        .frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_windows_1252_content_falls_back() {
    // 0xE9 (é) is not valid UTF-8 in this position.
    let file = create_temp_csv(b"city,count\nOrl\xE9ans,3\n");

    let loaded = read_csv_table(file.path()).unwrap();

    assert_ne!(loaded.encoding, "utf-8");
    assert_eq!(loaded.encoding, "latin-1");
    assert_eq!(loaded.frame.height(), 1);

    let summary = DatasetSummary::from_frame(&loaded.frame, 5).unwrap();
    assert_eq!(summary.head[0][0], "Orléans");
}

#[test]
fn test_zero_byte_file_is_empty() {
    let file = create_temp_csv(b"");

    let result = read_csv_table(file.path());

    assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
}

#[test]
fn test_parser_rejection_is_reported() {
    let file = create_temp_csv(b"a,b\n1,2\n3,4,5\n");

    let result = read_csv_table(file.path());

    match result {
        Err(IngestError::CsvParse { message, .. }) => assert!(!message.is_empty()),
        other => panic!("expected CsvParse, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();

    let result = read_csv_table(&dir.path().join("vanished.csv"));

    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn test_loading_is_idempotent() {
    let file = create_temp_csv(b"a,b\n1,x\n2,y\n3,\n");

    let first = read_csv_table(file.path()).unwrap();
    let second = read_csv_table(file.path()).unwrap();

    assert_eq!(first.frame.height(), second.frame.height());
    assert_eq!(first.frame.width(), second.frame.width());
    assert_eq!(
        first.frame.get_column_names(),
        second.frame.get_column_names()
    );

    let first_summary = DatasetSummary::from_frame(&first.frame, 5).unwrap();
    let second_summary = DatasetSummary::from_frame(&second.frame, 5).unwrap();
    assert_eq!(first_summary.column_names(), second_summary.column_names());
}

#[test]
fn test_summary_counts_missing_values() {
    let file = create_temp_csv(b"a,b\n1,x\n2,\n3,\n");

    let loaded = read_csv_table(file.path()).unwrap();
    let summary = DatasetSummary::from_frame(&loaded.frame, 5).unwrap();

    let missing = summary.missing_columns();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].name, "b");
    assert_eq!(missing[0].missing, 2);
}
