//! Wiring of a session to the real terminal.

pub mod shell;

pub use shell::{Shell, ShellOptions};

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use console::Term;

use crate::app::{ActionSink, Explorer, Settings};

/// Run an interactive session on stdin/stdout starting in `start_dir`.
pub fn run_app(start_dir: PathBuf, settings: &Settings, sink: Box<dyn ActionSink>) -> anyhow::Result<()> {
    if !settings.color {
        console::set_colors_enabled(false);
    }

    let term = Term::stdout();
    let options = ShellOptions {
        clear_screen: settings.clear_screen && term.is_term(),
        pause: settings.pause_after_action,
    };
    tracing::debug!(start_dir = %start_dir.display(), ?options, "starting session");

    let explorer = Explorer::new(start_dir, sink).with_max_depth(settings.max_depth);
    let stdin = io::stdin();
    let mut shell = Shell::new(explorer, stdin.lock(), io::stdout(), options).with_screen(term);
    shell.run().context("terminal I/O failed")
}
