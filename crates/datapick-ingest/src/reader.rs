//! CSV loading into Polars DataFrames.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;

use crate::decode::decode_with_fallback;
use crate::error::{IngestError, Result};

/// A loaded DataFrame plus the encoding that decoded the source file.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub frame: DataFrame,
    /// Label of the encoding the file was decoded with.
    pub encoding: &'static str,
}

/// Reads a CSV file into a Polars DataFrame.
///
/// The file is decoded through the encoding fallback chain first, then
/// parsed from memory with a header row and schema inference over the
/// first 100 records. A file with no content, or one that parses to zero
/// data rows, is rejected as empty.
pub fn read_csv_table(path: &Path) -> Result<LoadedTable> {
    let decoded = decode_with_fallback(path)?;

    if decoded.text.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .into_reader_with_file_handle(Cursor::new(decoded.text))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if frame.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        encoding = decoded.encoding,
        rows = frame.height(),
        columns = frame.width(),
        "loaded CSV"
    );

    Ok(LoadedTable {
        frame,
        encoding: decoded.encoding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_basic_table() {
        let file = create_temp_csv("a,b,c\n1,2,3\n4,5,6\n");

        let loaded = read_csv_table(file.path()).unwrap();

        assert_eq!(loaded.encoding, "utf-8");
        assert_eq!(loaded.frame.height(), 2);
        assert_eq!(loaded.frame.width(), 3);
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = create_temp_csv("");

        let result = read_csv_table(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_header_only_file_rejected() {
        let file = create_temp_csv("a,b,c\n");

        let result = read_csv_table(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let file = create_temp_csv("a,b\n1,2\n3,4,5\n");

        let result = read_csv_table(file.path());

        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }
}
