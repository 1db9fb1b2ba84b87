//! Errors raised while loading the destination dataset.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures that prevent a dataset from loading at all.
///
/// Individual bad values never surface here: they are coerced during
/// normalization. These errors are fatal to the caller.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset at {path}")]
    Open {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The header row could not be read.
    #[error("failed to read the dataset header row")]
    ReadHeaders {
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A required column is absent from the header row.
    #[error("dataset is missing the required column {column:?}")]
    MissingColumn {
        /// Header name of the missing column.
        column: &'static str,
    },
    /// A data row could not be read.
    #[error("failed to read dataset record{}", line_suffix(.line))]
    ReadRecord {
        /// Line of the failing record, when known.
        line: Option<u64>,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|number| format!(" on line {number}"))
        .unwrap_or_default()
}
