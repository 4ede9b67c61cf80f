use std::fs;
use std::path::Path;

use super::error::FsOpError;

/// Rename or move `src` to `dest` with a single `rename(2)`.
///
/// No copy fallback is attempted, so moves across filesystems fail with the
/// OS error (`EXDEV`). Errors are attributed to `src`.
pub fn rename_path<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> Result<(), FsOpError> {
    let s = src.as_ref();
    fs::rename(s, dest.as_ref()).map_err(FsOpError::at(s))
}
