//! Filesystem access for dataset files built on `cap-std` and `camino`.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

use crate::LoadError;

/// Open a dataset file using ambient authority.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file is missing or unreadable.
pub fn open_dataset_file(path: &Utf8Path) -> Result<fs_utf8::File, LoadError> {
    fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
/// Propagates I/O errors from inspecting the parent directory or the file,
/// including [`io::ErrorKind::NotFound`] when either is missing.
pub fn dataset_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "dataset path should include a file name",
        )
    })?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
