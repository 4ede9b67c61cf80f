pub mod config_dirs;
pub mod read_settings;

pub use config_dirs::{default_settings_path, project_config_dir};
pub use read_settings::{load_settings, parse_settings, Settings};
