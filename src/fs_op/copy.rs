use std::fs;
use std::io;
use std::path::Path;

use fs_extra::error::ErrorKind as ExtraKind;
use fs_extra::file::{copy as fs_extra_copy, CopyOptions};

use super::error::FsOpError;

/// Copy the bytes of regular file `src` into `dst`, replacing `dst` if it
/// exists. Returns the number of bytes copied.
///
/// Directories are rejected. Permissions and timestamps of `src` are not
/// carried over.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<u64, FsOpError> {
    let s = src.as_ref();
    let d = dst.as_ref();

    let meta = fs::metadata(s).map_err(FsOpError::at(s))?;
    if !meta.is_file() {
        return Err(FsOpError::Io {
            path: s.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "source is not a regular file"),
        });
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;

    fs_extra_copy(s, d, &options).map_err(|e| from_extra(d, e))
}

// Source problems were ruled out above, so remaining failures belong to `dst`.
fn from_extra(dst: &Path, e: fs_extra::error::Error) -> FsOpError {
    let msg = e.to_string();
    match e.kind {
        ExtraKind::NotFound => FsOpError::PathNotFound(dst.to_path_buf()),
        ExtraKind::PermissionDenied => FsOpError::PermissionDenied(dst.to_path_buf()),
        ExtraKind::Io(io_err) => FsOpError::from_io(dst, io_err),
        _ => FsOpError::Io {
            path: dst.to_path_buf(),
            source: io::Error::other(msg),
        },
    }
}
