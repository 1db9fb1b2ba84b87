//! Loading the destination dataset from CSV.
//!
//! The loader reads the six required columns (`Name`, `City`, `State`,
//! `Zone`, `Google review rating`, `Number of google review in lakhs`) into
//! [`RawDestination`](getaway_core::RawDestination) rows and hands them to a
//! [`Normalizer`](getaway_core::Normalizer). A missing file or a missing
//! column is fatal; bad numeric cells are not.

#![forbid(unsafe_code)]

use camino::Utf8Path;
use getaway_core::{Dataset, Normalizer, RawDestination};
use log::info;

mod error;
mod reader;
mod source;

pub use error::LoadError;
pub use reader::{
    CITY_COLUMN, NAME_COLUMN, RATING_COLUMN, REVIEW_COUNT_COLUMN, STATE_COLUMN, ZONE_COLUMN,
    read_destinations,
};
pub use source::{dataset_is_file, open_dataset_file};

/// Read raw rows from the CSV file at `path`.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be opened and
/// propagates decoding errors from [`read_destinations`].
pub fn load_raw(path: &Utf8Path) -> Result<Vec<RawDestination>, LoadError> {
    let file = open_dataset_file(path)?;
    read_destinations(file)
}

/// Read and normalize the dataset at `path`.
///
/// # Errors
/// Propagates errors from [`load_raw`].
pub fn load_dataset(path: &Utf8Path, normalizer: &Normalizer) -> Result<Dataset, LoadError> {
    let rows = load_raw(path)?;
    let dataset = normalizer.normalize(rows);
    info!(
        "loaded {} destinations from {path} (max log popularity {:.4})",
        dataset.len(),
        dataset.max_log_popularity()
    );
    Ok(dataset)
}
