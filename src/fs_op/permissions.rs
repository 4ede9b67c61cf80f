//! Permission inspection and `chmod`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use super::error::FsOpError;
use crate::ui::format::format_permissions;

/// Permission bits accepted by `chmod` (rwx for three classes plus
/// setuid/setgid/sticky).
pub const MODE_MASK: u32 = 0o7777;

/// Snapshot of a path's permission bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionInfo {
    pub path: PathBuf,
    /// Permission bits only (`st_mode & 0o7777`).
    pub mode: u32,
}

impl PermissionInfo {
    /// `rwxr-xr-x` style rendering.
    pub fn symbolic(&self) -> String {
        format_permissions(self.mode)
    }

    /// Octal rendering, e.g. `755`.
    pub fn octal(&self) -> String {
        format!("{:o}", self.mode)
    }
}

/// Read the permission bits of `path` (symlinks are followed).
pub fn inspect_permissions<P: AsRef<Path>>(path: P) -> Result<PermissionInfo, FsOpError> {
    let p = path.as_ref();
    let meta = fs::metadata(p).map_err(FsOpError::at(p))?;
    Ok(PermissionInfo {
        path: p.to_path_buf(),
        mode: meta.permissions().mode() & MODE_MASK,
    })
}

/// Parse an octal mode such as `755` or `0644`.
pub fn parse_mode(input: &str) -> Result<u32, FsOpError> {
    let s = input.trim();
    let digits = s.strip_prefix("0o").unwrap_or(s);
    match u32::from_str_radix(digits, 8) {
        Ok(m) if m <= MODE_MASK => Ok(m),
        _ => Err(FsOpError::InvalidMode(s.to_string())),
    }
}

/// Set the permission bits of `path` to `mode`.
pub fn change_permissions<P: AsRef<Path>>(path: P, mode: u32) -> Result<(), FsOpError> {
    let p = path.as_ref();
    fs::set_permissions(p, fs::Permissions::from_mode(mode & MODE_MASK)).map_err(FsOpError::at(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_valid_modes() {
        assert_eq!(parse_mode("755").unwrap(), 0o755);
        assert_eq!(parse_mode(" 0644 ").unwrap(), 0o644);
        assert_eq!(parse_mode("0o600").unwrap(), 0o600);
        assert_eq!(parse_mode("4755").unwrap(), 0o4755);
        assert_eq!(parse_mode("0").unwrap(), 0);
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "rwx", "789", "17777", "-1", "7 5 5"] {
            assert!(
                matches!(parse_mode(bad), Err(FsOpError::InvalidMode(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn change_then_inspect() {
        let td = tempdir().unwrap();
        let f = td.path().join("f.sh");
        fs::write(&f, "").unwrap();

        change_permissions(&f, 0o755).unwrap();
        let info = inspect_permissions(&f).unwrap();
        assert_eq!(info.mode, 0o755);
        assert_eq!(info.symbolic(), "rwxr-xr-x");
        assert_eq!(info.octal(), "755");

        change_permissions(&f, 0o640).unwrap();
        assert_eq!(inspect_permissions(&f).unwrap().symbolic(), "rw-r-----");
    }

    #[test]
    fn missing_path_errors() {
        let td = tempdir().unwrap();
        let p = td.path().join("nope");
        assert!(matches!(inspect_permissions(&p), Err(FsOpError::PathNotFound(_))));
        assert!(matches!(change_permissions(&p, 0o644), Err(FsOpError::PathNotFound(_))));
    }
}
