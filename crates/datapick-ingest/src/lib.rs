//! Dataset ingestion utilities.
//!
//! This crate provides functionality for discovering CSV files, decoding
//! them through a fixed encoding fallback chain, loading them into Polars
//! DataFrames, and profiling the result.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use datapick_ingest::{DatasetSummary, list_csv_files, read_csv_table};
//!
//! let candidates = list_csv_files(Path::new("."))?;
//! let loaded = read_csv_table(&candidates[0].path)?;
//! let summary = DatasetSummary::from_frame(&loaded.frame, 5)?;
//! ```

mod decode;
mod discovery;
mod error;
mod profile;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{CsvCandidate, list_csv_files};

// === Decoding ===
pub use decode::{DecodedText, ENCODING_CANDIDATES, decode_with_fallback};

// === CSV Reading ===
pub use reader::{LoadedTable, read_csv_table};

// === Profiling ===
pub use profile::{ColumnProfile, DatasetSummary};
