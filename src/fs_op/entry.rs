use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

/// Owner-execute permission bit.
const S_IXUSR: u32 = 0o100;

/// Classification of an entry encountered while walking a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Not a directory, owner-execute bit set.
    Executable,
    RegularFile,
}

impl EntryKind {
    /// Classify from metadata: directory bit first, then owner-execute.
    pub fn classify(meta: &Metadata) -> Self {
        if meta.is_dir() {
            EntryKind::Directory
        } else if meta.permissions().mode() & S_IXUSR != 0 {
            EntryKind::Executable
        } else {
            EntryKind::RegularFile
        }
    }

    /// Short tag used in listings.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Directory => "Dir",
            EntryKind::Executable => "Exe",
            EntryKind::RegularFile => "File",
        }
    }
}

/// One filesystem object visited during a traversal.
///
/// Built from a single metadata query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
    pub modified: Option<DateTime<Local>>,
    /// Raw permission bits (`st_mode`).
    pub mode: u32,
    /// Number of descents from the traversal root (root children are 0).
    pub depth: usize,
}

impl DirectoryEntry {
    pub fn from_metadata(name: String, path: PathBuf, meta: &Metadata, depth: usize) -> Self {
        DirectoryEntry {
            name,
            path,
            kind: EntryKind::classify(meta),
            size: meta.len(),
            modified: meta.modified().ok().map(DateTime::<Local>::from),
            mode: meta.permissions().mode(),
            depth,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classify_dir_exe_and_file() {
        let td = tempdir().unwrap();
        let dir = td.path().join("d");
        fs::create_dir(&dir).unwrap();
        let exe = td.path().join("run.sh");
        fs::write(&exe, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o744)).unwrap();
        let plain = td.path().join("notes.txt");
        fs::write(&plain, "hi").unwrap();
        fs::set_permissions(&plain, fs::Permissions::from_mode(0o644)).unwrap();

        assert_eq!(EntryKind::classify(&fs::metadata(&dir).unwrap()), EntryKind::Directory);
        assert_eq!(EntryKind::classify(&fs::metadata(&exe).unwrap()), EntryKind::Executable);
        assert_eq!(EntryKind::classify(&fs::metadata(&plain).unwrap()), EntryKind::RegularFile);
    }

    #[test]
    fn group_execute_alone_is_not_executable() {
        let td = tempdir().unwrap();
        let f = td.path().join("g.sh");
        fs::write(&f, "").unwrap();
        fs::set_permissions(&f, fs::Permissions::from_mode(0o654)).unwrap();
        assert_eq!(EntryKind::classify(&fs::metadata(&f).unwrap()), EntryKind::RegularFile);
    }

    #[test]
    fn from_metadata_captures_size() {
        let td = tempdir().unwrap();
        let f = td.path().join("five.bin");
        fs::write(&f, b"12345").unwrap();
        let meta = fs::metadata(&f).unwrap();
        let e = DirectoryEntry::from_metadata("five.bin".into(), f.clone(), &meta, 2);
        assert_eq!(e.size, 5);
        assert_eq!(e.depth, 2);
        assert!(e.modified.is_some());
        assert!(!e.is_dir());
    }
}
