use std::fs;
use std::path::Path;

use super::error::FsOpError;
use super::stat::PathType;

/// Remove a file, symlink or *empty* directory at `path`.
///
/// Non-empty directories are refused by the OS and reported as
/// `FsOpError::Io`. A missing path is `FsOpError::PathNotFound`; a path
/// running through a non-directory is `FsOpError::NotADirectory`.
pub fn remove_path(path: impl AsRef<Path>) -> Result<(), FsOpError> {
    let p = path.as_ref();
    match PathType::of(p)? {
        PathType::Directory => fs::remove_dir(p).map_err(FsOpError::at(p)),
        PathType::File | PathType::Other => fs::remove_file(p).map_err(FsOpError::at(p)),
    }
}
