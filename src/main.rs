use anyhow::Result;
use clap::Parser;

use file_explorer::app::{ActionSink, FileActionLog, NullSink};
use file_explorer::cli::Cli;
use file_explorer::{logging, runner};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    let _log_guard = logging::init(&settings)?;

    let start_dir = cli.start_dir()?;
    let sink: Box<dyn ActionSink> = if cli.no_action_log {
        Box::new(NullSink)
    } else {
        Box::new(FileActionLog::new(start_dir.join(&settings.action_log)))
    };

    runner::run_app(start_dir, &settings, sink)
}
