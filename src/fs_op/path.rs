use std::path::{Path, PathBuf};

use super::error::FsOpError;

/// Resolve a user-supplied name against `base` without touching the disk.
///
/// - Empty (or whitespace-only) input is an error.
/// - Absolute paths are returned as-is; relative ones are joined to `base`.
///
/// Names are taken literally: `~notes` is a file in `base`.
pub fn resolve_name(input: &str, base: &Path) -> Result<PathBuf, FsOpError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FsOpError::EmptyPath);
    }
    let p = PathBuf::from(input);
    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(base.join(p))
    }
}

/// Resolve and validate a directory to change into.
///
/// `~` and `~/...` expand to `$HOME`; anything else follows
/// [`resolve_name`]. The target must exist and be a directory. The result is
/// canonicalized so `..` components collapse.
pub fn resolve_path(input: &str, base: &Path) -> Result<PathBuf, FsOpError> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    resolve_dir(input, base, home.as_deref())
}

fn resolve_dir(input: &str, base: &Path, home: Option<&Path>) -> Result<PathBuf, FsOpError> {
    let candidate = match expand_tilde(input.trim(), home)? {
        Some(p) => p,
        None => resolve_name(input, base)?,
    };
    if !candidate.exists() {
        return Err(FsOpError::PathNotFound(candidate));
    }
    if !candidate.is_dir() {
        return Err(FsOpError::NotADirectory(candidate));
    }
    candidate.canonicalize().map_err(FsOpError::at(&candidate))
}

// `None` when `input` is not `~` or `~/...`; `~user` forms are left alone.
fn expand_tilde(input: &str, home: Option<&Path>) -> Result<Option<PathBuf>, FsOpError> {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(None),
    };
    let home = home.ok_or(FsOpError::HomeNotFound)?;
    if rest.is_empty() {
        Ok(Some(home.to_path_buf()))
    } else {
        Ok(Some(home.join(rest)))
    }
}
