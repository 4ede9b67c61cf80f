//! User-facing rendering of operation failures.

use crate::fs_op::error::FsOpError;

/// Short message naming the failed operation, e.g.
/// `Error deleting file: no such file or directory: /tmp/x`.
pub fn render_error(operation: &str, err: &FsOpError) -> String {
    let reason = match err {
        FsOpError::Io { source, .. } => format!("{} ({})", err, describe_io(source)),
        _ => err.to_string(),
    };
    format!("Error {}: {}", operation, reason)
}

fn describe_io(e: &std::io::Error) -> &'static str {
    match e.kind() {
        std::io::ErrorKind::AlreadyExists => "already exists",
        std::io::ErrorKind::InvalidInput => "invalid input",
        std::io::ErrorKind::Interrupted => "interrupted",
        std::io::ErrorKind::UnexpectedEof => "unexpected end of file",
        _ => "I/O failure",
    }
}
