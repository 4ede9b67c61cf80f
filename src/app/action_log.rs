//! Record of filesystem-mutating actions.
//!
//! The explorer reports every successful mutation to an [`ActionSink`]. The
//! default sink, [`FileActionLog`], appends one human-readable line per
//! action to a text file. Recording is best-effort: a sink never fails or
//! blocks the operation it describes.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::ui::format::format_time;

/// Kind of mutation being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Delete,
    Rename,
    Copy,
    Chmod,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Create => "create",
            ActionKind::Delete => "delete",
            ActionKind::Rename => "rename",
            ActionKind::Copy => "copy",
            ActionKind::Chmod => "chmod",
        };
        f.write_str(s)
    }
}

/// Destination for action records.
pub trait ActionSink {
    /// Record that `kind` was applied to `subject`. `detail` is the
    /// human-readable description, e.g. `Created file: notes.txt`.
    fn record(&self, kind: ActionKind, subject: &Path, detail: &str);
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ActionSink for NullSink {
    fn record(&self, _kind: ActionKind, _subject: &Path, _detail: &str) {}
}

/// Appends `<timestamp> - <detail>` lines to a file.
#[derive(Debug, Clone)]
pub struct FileActionLog {
    path: PathBuf,
}

impl FileActionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileActionLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut f = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(f, "{}", line)
    }
}

/// Render one log line.
pub fn format_log_line(detail: &str) -> String {
    format!("{} - {}", format_time(&Local::now()), detail)
}

impl ActionSink for FileActionLog {
    fn record(&self, kind: ActionKind, subject: &Path, detail: &str) {
        tracing::info!(action = %kind, subject = %subject.display(), "{}", detail);
        if let Err(e) = self.append(&format_log_line(detail)) {
            tracing::warn!(log = %self.path.display(), error = %e, "could not append to action log");
        }
    }
}
