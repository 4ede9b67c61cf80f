use std::fs::File;
use std::path::Path;

use super::error::FsOpError;

/// Create an empty file at `path`, truncating it if it already exists.
///
/// Parent directories are not created; a missing parent is reported as
/// `FsOpError::PathNotFound`.
pub fn create_file<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let p = path.as_ref();
    File::create(p).map_err(FsOpError::at(p))?;
    Ok(())
}
