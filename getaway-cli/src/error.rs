//! Error types emitted by the getaway CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use getaway_data::LoadError;
use thiserror::Error;

/// Errors emitted by the getaway CLI.
///
/// Every variant is fatal. A source city missing from the dataset is not an
/// error at this level; it is reported in the command output instead.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The requested number of recommendations was zero.
    #[error("--{field} must be at least 1")]
    InvalidLimit {
        /// Name of the offending option.
        field: &'static str,
    },
    /// The dataset file does not exist.
    #[error("File {path} not found.")]
    MissingDataset {
        /// Requested dataset path.
        path: Utf8PathBuf,
    },
    /// The dataset path exists but is not a file.
    #[error("dataset path {path:?} exists but is not a file")]
    DatasetNotFile {
        /// Requested dataset path.
        path: Utf8PathBuf,
    },
    /// The dataset path could not be inspected.
    #[error("failed to inspect dataset path {path:?}: {source}")]
    InspectDataset {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading or decoding the dataset failed.
    #[error("failed to load dataset {path:?}: {source}")]
    LoadDataset {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from the loader.
        #[source]
        source: LoadError,
    },
    /// Serializing JSON output failed.
    #[error("failed to serialize recommendations: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
