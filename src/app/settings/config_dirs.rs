use directories_next::ProjectDirs;
use std::path::PathBuf;

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Per-user configuration directory, e.g. `~/.config/file_explorer` on Linux.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "file_explorer").map(|d| d.config_dir().to_path_buf())
}

/// Location of the settings file when `--config` is not given.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}
