use std::fs;
use std::path::Path;

use super::error::FsOpError;

/// Lightweight classification of a path, without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// A real directory (not a link to one).
    Directory,
    /// A regular file.
    File,
    /// Symlink, socket, FIFO, device node, ...
    Other,
}

impl PathType {
    /// Classify `path` from a single `lstat`. Failures keep their cause
    /// (missing, permission, bad component).
    pub fn of<P: AsRef<Path>>(path: P) -> Result<Self, FsOpError> {
        let p = path.as_ref();
        let m = fs::symlink_metadata(p).map_err(FsOpError::at(p))?;
        Ok(if m.is_dir() {
            PathType::Directory
        } else if m.is_file() {
            PathType::File
        } else {
            PathType::Other
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::symlink;
    use tempfile::tempdir;

    #[test]
    fn path_type_nonexistent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("no_such_file_hopefully");
        assert!(matches!(PathType::of(&p), Err(FsOpError::PathNotFound(q)) if q == p));
    }

    #[test]
    fn path_type_below_file_is_not_a_directory() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        assert!(matches!(PathType::of(file.join("x")), Err(FsOpError::NotADirectory(_))));
    }

    #[test]
    fn path_type_file_dir_and_link() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        assert_eq!(PathType::of(&file).unwrap(), PathType::File);

        let dir = tmp.path().join("subdir");
        fs::create_dir(&dir).unwrap();
        assert_eq!(PathType::of(&dir).unwrap(), PathType::Directory);

        let link = tmp.path().join("link");
        symlink(&dir, &link).unwrap();
        assert_eq!(PathType::of(&link).unwrap(), PathType::Other);
    }
}
