//! Depth-first, pre-order directory traversal shared by listing and search.
//!
//! `Traversal` is a lazy iterator driven by an explicit work-stack rather than
//! call-stack recursion. Each stack frame owns one open `ReadDir` handle and is
//! dropped (closing the handle) as soon as that directory is exhausted, so the
//! number of open handles is bounded by the depth of the current branch.
//!
//! Failures are local: a directory that cannot be opened yields a single
//! `TraversalEvent::Unreadable` and is skipped; an entry whose metadata cannot
//! be read is dropped without any event. Siblings and ancestors are unaffected.
//!
//! Metadata is read with `fs::metadata`, which follows symbolic links. A link
//! pointing back up the tree is therefore descended into again; there is no
//! cycle detection. `with_max_depth` bounds the walk when that matters.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::entry::DirectoryEntry;

/// What the traversal reports for each visited entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalMode {
    /// Emit every entry for display.
    List,
    /// Emit only entries whose name equals the target, ignoring case.
    Search(String),
}

impl TraversalMode {
    pub fn search(target: impl Into<String>) -> Self {
        TraversalMode::Search(target.into())
    }
}

/// Item produced by [`Traversal`].
#[derive(Debug)]
pub enum TraversalEvent {
    /// List mode: an entry to format.
    Entry(DirectoryEntry),
    /// Search mode: full path of an entry whose name matched.
    Found(PathBuf),
    /// A directory could not be opened; its subtree is skipped.
    Unreadable { path: PathBuf, error: io::Error },
}

struct Frame {
    entries: fs::ReadDir,
    depth: usize,
}

/// Lazy, finite, non-restartable walk rooted at one directory.
pub struct Traversal {
    mode: TraversalMode,
    stack: Vec<Frame>,
    /// Directory to open before reading further (the root, or the directory
    /// just emitted).
    pending: Option<(PathBuf, usize)>,
    max_depth: Option<usize>,
}

impl Traversal {
    pub fn new(root: impl Into<PathBuf>, mode: TraversalMode) -> Self {
        Traversal {
            mode,
            stack: Vec::new(),
            pending: Some((root.into(), 0)),
            max_depth: None,
        }
    }

    /// Stop descending below `depth` (root children are depth 0). `None`
    /// walks the whole tree.
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    fn may_descend(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }
}

/// Full-name equality ignoring case. `README` does not match `README.txt`.
pub fn name_matches(name: &str, target: &str) -> bool {
    name == target || name.to_lowercase() == target.to_lowercase()
}

impl Iterator for Traversal {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<TraversalEvent> {
        loop {
            if let Some((path, depth)) = self.pending.take() {
                match fs::read_dir(&path) {
                    Ok(entries) => self.stack.push(Frame { entries, depth }),
                    Err(error) => {
                        tracing::debug!(path = %path.display(), %error, "skipping unreadable directory");
                        return Some(TraversalEvent::Unreadable { path, error });
                    }
                }
            }

            let frame = self.stack.last_mut()?;
            let depth = frame.depth;
            let dirent = match frame.entries.next() {
                Some(Ok(d)) => d,
                Some(Err(error)) => {
                    tracing::debug!(%error, "directory read failed mid-way");
                    continue;
                }
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let path = dirent.path();
            let meta = match fs::metadata(&path) {
                Ok(m) => m,
                Err(error) => {
                    tracing::debug!(path = %path.display(), %error, "skipping entry without metadata");
                    continue;
                }
            };
            let name = dirent.file_name().to_string_lossy().into_owned();
            let entry = DirectoryEntry::from_metadata(name, path, &meta, depth);

            if entry.is_dir() && self.may_descend(depth) {
                self.pending = Some((entry.path.clone(), depth + 1));
            }

            match &self.mode {
                TraversalMode::List => return Some(TraversalEvent::Entry(entry)),
                TraversalMode::Search(target) => {
                    if name_matches(&entry.name, target) {
                        return Some(TraversalEvent::Found(entry.path));
                    }
                }
            }
        }
    }
}
