//! Text rendering for the interactive shell.

pub mod format;
pub mod menu;

pub use format::{format_entry_line, format_permissions, format_size, format_time};
pub use menu::{menu_labels, render_banner, render_menu, MenuChoice};
