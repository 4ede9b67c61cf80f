//! Interactive, menu-driven file explorer.
//!
//! The library holds everything but argument parsing glue: the traversal
//! engine and filesystem primitives (`fs_op`), the session state and action
//! log (`app`), text rendering (`ui`) and the menu loop (`runner`).

pub mod app;
pub mod cli;
pub mod errors;
pub mod fs_op;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::app::{Explorer, Settings};
pub use crate::fs_op::{DirectoryEntry, EntryKind, FsOpError, Traversal, TraversalEvent, TraversalMode};
