use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by filesystem operation helpers and `Explorer`-level ops.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// The path (or one of its parents) does not exist.
    #[error("no such file or directory: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The OS refused access to the path.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// A directory was required but the path is something else.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The user supplied an empty path or name.
    #[error("empty path")]
    EmptyPath,

    /// `~` could not be expanded.
    #[error("could not determine home directory")]
    HomeNotFound,

    /// Permission mode was not a valid octal number.
    #[error("invalid permission mode `{0}` (expected octal, e.g. 755)")]
    InvalidMode(String),

    /// Any other I/O failure (copy, create, write, ...).
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsOpError {
    /// Classify an `io::Error` raised while operating on `path`.
    pub fn from_io(path: impl AsRef<Path>, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => FsOpError::PathNotFound(path),
            io::ErrorKind::PermissionDenied => FsOpError::PermissionDenied(path),
            _ if err.raw_os_error() == Some(libc::ENOTDIR) => FsOpError::NotADirectory(path),
            _ => FsOpError::Io { path, source: err },
        }
    }

    /// Adapter for `map_err` at call sites that know the failing path.
    pub fn at(path: &Path) -> impl FnOnce(io::Error) -> FsOpError + '_ {
        move |err| FsOpError::from_io(path, err)
    }
}
