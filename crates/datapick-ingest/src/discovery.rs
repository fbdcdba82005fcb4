//! CSV file discovery.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{IngestError, Result};

/// A CSV file found in the search directory.
#[derive(Debug, Clone, Serialize)]
pub struct CsvCandidate {
    /// Path to the CSV file.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl CsvCandidate {
    /// File name portion of the path.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }

    /// File size in kilobytes, for display.
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Lists all CSV files in a directory.
///
/// Returns candidates sorted by file name. An empty vector means the
/// directory exists but contains no CSV files.
pub fn list_csv_files(dir: &Path) -> Result<Vec<CsvCandidate>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut candidates = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        // Check for .csv extension (case-insensitive)
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if !is_csv {
            continue;
        }

        let metadata = entry.metadata().map_err(|e| IngestError::FileRead {
            path: path.clone(),
            source: e,
        })?;

        candidates.push(CsvCandidate {
            path,
            size_bytes: metadata.len(),
        });
    }

    // Sort by file name
    candidates.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    tracing::debug!(dir = %dir.display(), count = candidates.len(), "listed CSV files");

    Ok(candidates)
}
