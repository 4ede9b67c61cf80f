//! Diagnostics set-up (`tracing`), separate from the action log.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::Settings;

/// Environment variable overriding `Settings::diagnostics_filter`.
pub const LOG_ENV: &str = "FILE_EXPLORER_LOG";

/// Build the filter from `FILE_EXPLORER_LOG`, falling back to `default`.
pub fn build_filter(default: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(f) => Ok(f),
        Err(_) => EnvFilter::try_new(default)
            .with_context(|| format!("invalid diagnostics filter `{}`", default)),
    }
}

/// Install the global subscriber.
///
/// Diagnostics go to `settings.diagnostics_file` when set (through a
/// non-blocking writer whose guard must be held until exit), otherwise to
/// stderr.
pub fn init(settings: &Settings) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(&settings.diagnostics_filter)?;

    let Some(path) = &settings.diagnostics_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!(e))?;
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("diagnostics file `{}` has no file name", path.display()))?;
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;
    Ok(Some(guard))
}
