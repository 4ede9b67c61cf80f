//! Explorer session: explicit current directory plus every user operation.

use std::path::{Path, PathBuf};

use super::action_log::{ActionKind, ActionSink};
use crate::fs_op::error::FsOpError;
use crate::fs_op::permissions::{self, PermissionInfo};
use crate::fs_op::traverse::{Traversal, TraversalMode};
use crate::fs_op::{copy, create, mv, path, remove};

/// State of one interactive session.
///
/// The current directory lives here rather than in the process, and every
/// user-supplied name is resolved against it. Successful mutations are
/// reported to the session's [`ActionSink`].
pub struct Explorer {
    cwd: PathBuf,
    sink: Box<dyn ActionSink>,
    max_depth: Option<usize>,
}

impl Explorer {
    pub fn new(cwd: impl Into<PathBuf>, sink: Box<dyn ActionSink>) -> Self {
        Explorer {
            cwd: cwd.into(),
            sink,
            max_depth: None,
        }
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a user-typed name against the current directory.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, FsOpError> {
        path::resolve_name(name, &self.cwd)
    }

    /// Recursive listing of the current directory.
    pub fn list(&self) -> Traversal {
        self.list_path(&self.cwd)
    }

    /// Recursive listing rooted at `root`.
    pub fn list_path(&self, root: &Path) -> Traversal {
        Traversal::new(root, TraversalMode::List).with_max_depth(self.max_depth)
    }

    /// Search the current directory tree for entries named `name`.
    pub fn search(&self, name: &str) -> Result<Traversal, FsOpError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FsOpError::EmptyPath);
        }
        Ok(Traversal::new(&self.cwd, TraversalMode::search(name)).with_max_depth(self.max_depth))
    }

    /// Switch the current directory. Returns the new (canonical) directory.
    pub fn change_directory(&mut self, input: &str) -> Result<&Path, FsOpError> {
        self.cwd = path::resolve_path(input, &self.cwd)?;
        tracing::debug!(cwd = %self.cwd.display(), "changed directory");
        Ok(&self.cwd)
    }

    pub fn create_file(&self, name: &str) -> Result<PathBuf, FsOpError> {
        let p = self.resolve(name)?;
        create::create_file(&p)?;
        self.sink
            .record(ActionKind::Create, &p, &format!("Created file: {}", name.trim()));
        Ok(p)
    }

    pub fn delete_file(&self, name: &str) -> Result<PathBuf, FsOpError> {
        let p = self.resolve(name)?;
        remove::remove_path(&p)?;
        self.sink
            .record(ActionKind::Delete, &p, &format!("Deleted file: {}", name.trim()));
        Ok(p)
    }

    /// Rename or move `old` to `new`; both are resolved against the cwd.
    pub fn rename(&self, old: &str, new: &str) -> Result<PathBuf, FsOpError> {
        let from = self.resolve(old)?;
        let to = self.resolve(new)?;
        mv::rename_path(&from, &to)?;
        self.sink.record(
            ActionKind::Rename,
            &from,
            &format!("Renamed/moved: {} -> {}", old.trim(), new.trim()),
        );
        Ok(to)
    }

    /// Copy file `src` to `dst`. Returns bytes copied.
    pub fn copy(&self, src: &str, dst: &str) -> Result<u64, FsOpError> {
        let from = self.resolve(src)?;
        let to = self.resolve(dst)?;
        let n = copy::copy_file(&from, &to)?;
        self.sink.record(
            ActionKind::Copy,
            &from,
            &format!("Copied file: {} -> {}", src.trim(), dst.trim()),
        );
        Ok(n)
    }

    pub fn show_permissions(&self, name: &str) -> Result<PermissionInfo, FsOpError> {
        permissions::inspect_permissions(self.resolve(name)?)
    }

    /// Apply octal `mode` (e.g. `"755"`) to `name`. Returns the parsed mode.
    pub fn change_permissions(&self, name: &str, mode: &str) -> Result<u32, FsOpError> {
        let p = self.resolve(name)?;
        let m = permissions::parse_mode(mode)?;
        permissions::change_permissions(&p, m)?;
        self.sink.record(
            ActionKind::Chmod,
            &p,
            &format!("Permissions changed: {}", name.trim()),
        );
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action_log::testing::RecordingSink;
    use crate::fs_op::traverse::TraversalEvent;
    use assert_fs::prelude::*;

    fn explorer(root: &Path) -> (Explorer, RecordingSink) {
        let sink = RecordingSink::default();
        (Explorer::new(root, Box::new(sink.clone())), sink)
    }

    fn names(ex: &Explorer) -> Vec<String> {
        let mut v: Vec<String> = ex
            .list()
            .filter_map(|ev| match ev {
                TraversalEvent::Entry(e) => Some(e.name),
                _ => None,
            })
            .collect();
        v.sort();
        v
    }

    #[test]
    fn create_then_delete_restores_listing() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("keep.txt").write_str("k").unwrap();
        temp.child("sub/inner").write_str("i").unwrap();
        let (ex, sink) = explorer(temp.path());

        let before = names(&ex);
        let created = ex.create_file("fresh.txt").unwrap();
        assert!(created.exists());
        assert!(names(&ex).contains(&"fresh.txt".to_string()));
        ex.delete_file("fresh.txt").unwrap();
        assert_eq!(names(&ex), before);

        let recs = sink.records.borrow();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].0, ActionKind::Create);
        assert_eq!(recs[0].2, "Created file: fresh.txt");
        assert_eq!(recs[1].0, ActionKind::Delete);
        assert_eq!(recs[1].2, "Deleted file: fresh.txt");
    }

    #[test]
    fn failed_operations_are_not_recorded() {
        let temp = assert_fs::TempDir::new().unwrap();
        let (ex, sink) = explorer(temp.path());
        assert!(matches!(ex.delete_file("ghost"), Err(FsOpError::PathNotFound(_))));
        assert!(ex.rename("ghost", "other").is_err());
        assert!(ex.copy("ghost", "other").is_err());
        assert!(ex.change_permissions("ghost", "644").is_err());
        assert!(matches!(ex.create_file("  "), Err(FsOpError::EmptyPath)));
        assert!(sink.records.borrow().is_empty());
    }

    #[test]
    fn change_directory_is_explicit_state() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("inner/x.txt").write_str("x").unwrap();
        let process_cwd = std::env::current_dir().unwrap();
        let (mut ex, _) = explorer(temp.path());

        let new_cwd = ex.change_directory("inner").unwrap().to_path_buf();
        assert_eq!(new_cwd, temp.path().join("inner").canonicalize().unwrap());
        assert_eq!(std::env::current_dir().unwrap(), process_cwd);
        assert_eq!(names(&ex), vec!["x.txt"]);

        assert!(matches!(ex.change_directory("x.txt"), Err(FsOpError::NotADirectory(_))));
        assert!(matches!(ex.change_directory("nowhere"), Err(FsOpError::PathNotFound(_))));
        // A failed change leaves the cwd alone.
        assert_eq!(ex.cwd(), new_cwd.as_path());
    }

    #[test]
    fn rename_and_copy_record_both_names() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.txt").write_str("abc").unwrap();
        let (ex, sink) = explorer(temp.path());

        assert_eq!(ex.copy("a.txt", "b.txt").unwrap(), 3);
        ex.rename("b.txt", "c.txt").unwrap();
        temp.child("c.txt").assert("abc");

        let recs = sink.records.borrow();
        assert_eq!(recs[0].2, "Copied file: a.txt -> b.txt");
        assert_eq!(recs[1].2, "Renamed/moved: b.txt -> c.txt");
    }

    #[test]
    fn permissions_round_trip() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("tool").write_str("").unwrap();
        let (ex, sink) = explorer(temp.path());

        assert_eq!(ex.change_permissions("tool", "750").unwrap(), 0o750);
        assert_eq!(ex.show_permissions("tool").unwrap().symbolic(), "rwxr-x---");
        assert!(matches!(ex.change_permissions("tool", "9"), Err(FsOpError::InvalidMode(_))));
        assert_eq!(sink.records.borrow().len(), 1);
    }

    #[test]
    fn search_rejects_empty_name() {
        let temp = assert_fs::TempDir::new().unwrap();
        let (ex, _) = explorer(temp.path());
        assert!(matches!(ex.search(" "), Err(FsOpError::EmptyPath)));
    }

    #[test]
    fn tilde_prefixed_names_stay_in_cwd() {
        let temp = assert_fs::TempDir::new().unwrap();
        let work = temp.child("work");
        work.create_dir_all().unwrap();
        temp.child("draft.txt").write_str("elsewhere").unwrap();
        let (ex, sink) = explorer(work.path());

        let created = ex.create_file("~draft.txt").unwrap();
        assert_eq!(created, work.path().join("~draft.txt"));
        assert!(created.exists());

        let deleted = ex.delete_file("~draft.txt").unwrap();
        assert_eq!(deleted, work.path().join("~draft.txt"));
        assert!(!deleted.exists());
        temp.child("draft.txt").assert("elsewhere");
        assert_eq!(sink.records.borrow()[1].2, "Deleted file: ~draft.txt");
    }

    #[test]
    fn delete_below_a_file_is_not_a_directory() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("file.txt").write_str("x").unwrap();
        let (ex, sink) = explorer(temp.path());
        assert!(matches!(ex.delete_file("file.txt/x"), Err(FsOpError::NotADirectory(_))));
        assert!(sink.records.borrow().is_empty());
    }

    #[test]
    fn out_of_range_mode_leaves_file_alone() {
        use std::os::unix::fs::PermissionsExt;
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("f.txt").write_str("x").unwrap();
        let (ex, sink) = explorer(temp.path());
        ex.change_permissions("f.txt", "640").unwrap();
        assert!(matches!(
            ex.change_permissions("f.txt", "17777"),
            Err(FsOpError::InvalidMode(_))
        ));
        let mode = std::fs::metadata(temp.path().join("f.txt")).unwrap().permissions().mode();
        assert_eq!(mode & 0o7777, 0o640);
        assert_eq!(sink.records.borrow().len(), 1);
    }
}
