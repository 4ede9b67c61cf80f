//! Pure helpers turning raw metadata into display strings.

use chrono::{DateTime, TimeZone};
use console::style;

use crate::fs_op::entry::{DirectoryEntry, EntryKind};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Human readable size with truncating division: `1535` -> `"1 KB"`.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{} KB", bytes / KIB)
    } else {
        format!("{} MB", bytes / MIB)
    }
}

/// Fixed-width calendar rendering, e.g. `Tue Mar  5 09:07:02 2024`.
///
/// Callers pass a `DateTime<Local>` for local-time display; any zone works.
pub fn format_time<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%a %b %e %H:%M:%S %Y").to_string()
}

/// Nine-character `rwxrwxrwx` string for the low permission bits of `mode`.
pub fn format_permissions(mode: u32) -> String {
    const BITS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];
    BITS.iter()
        .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' })
        .collect()
}

/// One listing row: indented, colored name followed by kind, size and mtime.
pub fn format_entry_line(e: &DirectoryEntry) -> String {
    let indent = " ".repeat(e.depth * 2);
    let name = match e.kind {
        EntryKind::Directory => style(&e.name).blue().bold().to_string(),
        EntryKind::Executable => style(&e.name).green().bold().to_string(),
        EntryKind::RegularFile => e.name.clone(),
    };
    let modified = e
        .modified
        .as_ref()
        .map(format_time)
        .unwrap_or_else(|| "(unknown)".into());
    format!(
        "{}{} [{}, {}, {}]",
        indent,
        name,
        e.kind.label(),
        format_size(e.size),
        modified
    )
}
