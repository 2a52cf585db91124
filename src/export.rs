//! Feature data export.
//!
//! The downstream trainer consumes feature vectors as tabular CSV plus a
//! JSON metadata sidecar describing the column schema; at the in-process
//! boundary it wants a dense numeric matrix. This module provides all
//! three, and nothing else: where the data comes from and where the bytes
//! go is the caller's concern.
//!
//! # Example
//!
//! ```
//! use screenplay_feature_extractor::export::write_csv;
//!
//! let rows = vec![vec![3.0, 1.0], vec![3.0, 0.5]];
//! let mut out = Vec::new();
//! write_csv(&rows, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "3,1\n3,0.5\n");
//! ```

use std::io::Write;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::config::FeatureSpec;
use crate::error::{Error, Result};
use crate::schema::SCHEMA_VERSION;

/// Metadata about an exported feature dataset.
///
/// Serialized as a JSON sidecar next to the CSV so an experiment can be
/// reproduced: the column list pins the spec order the model was trained
/// against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Column names in spec order.
    pub columns: Vec<String>,

    /// Number of exported lines (rows).
    pub n_lines: usize,

    /// Number of features per line (columns).
    pub n_features: usize,

    /// Catalog schema version the columns were drawn from.
    pub schema_version: String,

    /// Export timestamp (RFC 3339).
    pub export_timestamp: String,
}

impl ExportMetadata {
    /// Describe an export of `n_lines` vectors under the given spec.
    pub fn new(spec: &FeatureSpec, n_lines: usize) -> Self {
        Self {
            columns: spec.column_names().iter().map(|s| s.to_string()).collect(),
            n_lines,
            n_features: spec.len(),
            schema_version: SCHEMA_VERSION.to_string(),
            export_timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Serialize as pretty JSON to a writer.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Write feature vectors as CSV rows.
///
/// One comma-separated row per vector; values use their shortest `Display`
/// form, so integral features print without a decimal point. No header row
/// (the column schema travels in [`ExportMetadata`]).
pub fn write_csv<W: Write>(rows: &[Vec<f64>], writer: &mut W) -> Result<()> {
    for row in rows {
        let mut first = true;
        for value in row {
            if !first {
                writer.write_all(b",")?;
            }
            write!(writer, "{value}")?;
            first = false;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Assemble feature vectors into a rows × columns matrix.
///
/// Column count is taken from the first row; a row of any other length is a
/// fatal [`Error::RaggedRows`]. An empty input yields a 0 × 0 matrix.
pub fn feature_matrix(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let n_cols = rows.first().map(Vec::len).unwrap_or(0);
    let mut matrix = Array2::zeros((rows.len(), n_cols));

    for (i, row) in rows.iter().enumerate() {
        if row.len() != n_cols {
            return Err(Error::RaggedRows {
                row: i,
                actual: row.len(),
                expected: n_cols,
            });
        }
        for (j, value) in row.iter().enumerate() {
            matrix[[i, j]] = *value;
        }
    }

    Ok(matrix)
}
