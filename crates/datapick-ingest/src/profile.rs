//! Dataset profiling: shape, dtypes, missing counts, head rows.

use polars::prelude::*;
use serde::Serialize;

use crate::error::Result;

/// Per-column profile: name, inferred dtype, missing-value count.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub missing: usize,
}

/// Descriptive summary of a loaded DataFrame.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    /// Total row count of the source frame.
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
    /// First rows rendered as strings, one inner vector per row. Null
    /// cells render as empty strings.
    pub head: Vec<Vec<String>>,
}

impl DatasetSummary {
    /// Profiles a frame, capturing up to `head_rows` preview rows.
    pub fn from_frame(frame: &DataFrame, head_rows: usize) -> Result<Self> {
        let columns = frame
            .get_columns()
            .iter()
            .map(|col| ColumnProfile {
                name: col.name().to_string(),
                dtype: col.dtype().to_string(),
                missing: col.null_count(),
            })
            .collect();

        let preview = frame.head(Some(head_rows));
        let mut head = Vec::with_capacity(preview.height());
        for idx in 0..preview.height() {
            let mut row = Vec::with_capacity(preview.width());
            for col in preview.get_columns() {
                let value = col.as_materialized_series().get(idx)?;
                row.push(any_to_string(value));
            }
            head.push(row);
        }

        Ok(Self {
            rows: frame.height(),
            columns,
            head,
        })
    }

    /// Column count.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column names in frame order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.name.as_str()).collect()
    }

    /// Columns with at least one missing value.
    pub fn missing_columns(&self) -> Vec<&ColumnProfile> {
        self.columns.iter().filter(|col| col.missing > 0).collect()
    }
}

/// Converts a Polars AnyValue to a display string. Nulls render empty.
fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number without trailing zeros.
fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        df!(
            "id" => [1i64, 2, 3],
            "name" => [Some("ana"), None, Some("bo")],
            "score" => [Some(1.5f64), Some(2.0), None],
        )
        .unwrap()
    }

    #[test]
    fn test_summary_shape_and_names() {
        let summary = DatasetSummary::from_frame(&sample_frame(), 5).unwrap();

        assert_eq!(summary.rows, 3);
        assert_eq!(summary.width(), 3);
        assert_eq!(summary.column_names(), vec!["id", "name", "score"]);
    }

    #[test]
    fn test_missing_counts() {
        let summary = DatasetSummary::from_frame(&sample_frame(), 5).unwrap();

        let missing = summary.missing_columns();
        let names: Vec<&str> = missing.iter().map(|col| col.name.as_str()).collect();
        assert_eq!(names, vec!["name", "score"]);
        assert!(missing.iter().all(|col| col.missing == 1));
    }

    #[test]
    fn test_no_missing_values() {
        let frame = df!("a" => [1i64, 2], "b" => ["x", "y"]).unwrap();
        let summary = DatasetSummary::from_frame(&frame, 5).unwrap();

        assert!(summary.missing_columns().is_empty());
    }

    #[test]
    fn test_head_is_bounded_and_renders_nulls_empty() {
        let summary = DatasetSummary::from_frame(&sample_frame(), 2).unwrap();

        assert_eq!(summary.head.len(), 2);
        assert_eq!(summary.head[0], vec!["1", "ana", "1.5"]);
        assert_eq!(summary.head[1][1], "");
    }

    #[test]
    fn test_dtypes_reported() {
        let summary = DatasetSummary::from_frame(&sample_frame(), 5).unwrap();

        assert_eq!(summary.columns[0].dtype, "i64");
        assert_eq!(summary.columns[1].dtype, "str");
        assert_eq!(summary.columns[2].dtype, "f64");
    }
}
