//! Filesystem primitives: traversal, metadata classification and the
//! mutating operations offered by the explorer. Everything here takes
//! explicit paths; nothing reads or changes the process working directory.

pub mod copy;
pub mod create;
pub mod entry;
pub mod error;
pub mod mv;
pub mod path;
pub mod permissions;
pub mod remove;
pub mod stat;
pub mod traverse;

pub use entry::{DirectoryEntry, EntryKind};
pub use error::FsOpError;
pub use permissions::PermissionInfo;
pub use traverse::{Traversal, TraversalEvent, TraversalMode};
