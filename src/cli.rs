use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::app::settings::{load_settings, Settings};

/// Interactive, menu-driven file explorer.
#[derive(Debug, Parser)]
#[command(name = "file_explorer", version, about)]
pub struct Cli {
    /// Directory the session starts in [default: current directory]
    #[arg(short = 'C', long, value_name = "DIR")]
    pub start_dir: Option<PathBuf>,

    /// Settings file [default: <config dir>/file_explorer/settings.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Action log file (relative paths are taken from the start directory)
    #[arg(long, value_name = "FILE", conflicts_with = "no_action_log")]
    pub action_log: Option<PathBuf>,

    /// Do not record actions
    #[arg(long)]
    pub no_action_log: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Never clear the screen between actions
    #[arg(long)]
    pub no_clear: bool,

    /// Do not wait for Enter after each action
    #[arg(long)]
    pub no_pause: bool,

    /// Deepest level listings and searches descend to
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub diagnostics_file: Option<PathBuf>,
}

impl Cli {
    /// Overlay command-line flags on `settings`.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(p) = &self.action_log {
            settings.action_log = p.clone();
        }
        if self.no_color {
            settings.color = false;
        }
        if self.no_clear {
            settings.clear_screen = false;
        }
        if self.no_pause {
            settings.pause_after_action = false;
        }
        if self.max_depth.is_some() {
            settings.max_depth = self.max_depth;
        }
        if let Some(p) = &self.diagnostics_file {
            settings.diagnostics_file = Some(p.clone());
        }
        settings
    }

    /// Load the settings file and apply flags on top.
    pub fn settings(&self) -> Result<Settings> {
        Ok(self.apply(load_settings(self.config.as_deref())?))
    }

    /// Absolute, validated start directory.
    pub fn start_dir(&self) -> Result<PathBuf> {
        let dir = match &self.start_dir {
            Some(d) => d.clone(),
            None => std::env::current_dir().context("cannot determine current directory")?,
        };
        let dir = dir
            .canonicalize()
            .with_context(|| format!("start directory `{}`", dir.display()))?;
        if !dir.is_dir() {
            bail!("start directory `{}` is not a directory", dir.display());
        }
        Ok(dir)
    }
}
