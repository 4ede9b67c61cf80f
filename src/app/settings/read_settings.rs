use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::config_dirs::default_settings_path;

/// User-tunable behavior of the explorer, read from TOML.
///
/// Every field has a default so partial files are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Action log file; relative paths are taken from the start directory.
    pub action_log: PathBuf,
    /// Colorize listings and the banner.
    pub color: bool,
    /// Clear the terminal before drawing the menu.
    pub clear_screen: bool,
    /// Wait for Enter after each action.
    pub pause_after_action: bool,
    /// Deepest level a listing or search descends to (root children are 0).
    pub max_depth: Option<usize>,
    /// Write diagnostics here instead of stderr.
    pub diagnostics_file: Option<PathBuf>,
    /// `tracing` filter directive used when `FILE_EXPLORER_LOG` is unset.
    pub diagnostics_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            action_log: PathBuf::from("file_explorer.log"),
            color: true,
            clear_screen: true,
            pause_after_action: true,
            max_depth: None,
            diagnostics_file: None,
            diagnostics_filter: "warn".to_string(),
        }
    }
}

pub fn parse_settings(s: &str) -> Result<Settings> {
    toml::from_str(s).context("invalid settings TOML")
}

/// Load settings.
///
/// With an explicit `path` the file must exist. Without one the per-user
/// default location is tried and a missing file yields `Settings::default()`.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match default_settings_path() {
            Some(p) => (p, false),
            None => return Ok(Settings::default()),
        },
    };
    if !required && !path.exists() {
        return Ok(Settings::default());
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_overrides_some_fields() {
        let s = parse_settings("color = false\nmax_depth = 3\naction_log = \"/tmp/x.log\"\n").unwrap();
        assert!(!s.color);
        assert_eq!(s.max_depth, Some(3));
        assert_eq!(s.action_log, PathBuf::from("/tmp/x.log"));
        assert!(s.pause_after_action);
        assert_eq!(s.diagnostics_filter, "warn");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_settings("colour = true").is_err());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let td = tempdir().unwrap();
        assert!(load_settings(Some(&td.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn explicit_file_is_read() {
        let td = tempdir().unwrap();
        let p = td.path().join("settings.toml");
        std::fs::write(&p, "clear_screen = false\n").unwrap();
        let s = load_settings(Some(&p)).unwrap();
        assert!(!s.clear_screen);
    }
}
