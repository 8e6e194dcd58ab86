//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive runs log to a file. Print mode logs
//! to stderr. Nothing is installed unless a filter directive is configured.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::StartupConfig;
use crate::error::ShelfResult;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file
    File(PathBuf),
    /// Write to standard error
    Stderr,
}

/// Install the global subscriber for this run.
///
/// Returns the target used, or None when logging is off or another global
/// subscriber is already installed. Fails only if the log file cannot be
/// opened.
pub fn init_logging(config: &StartupConfig, interactive: bool) -> ShelfResult<Option<LogTarget>> {
    let Some(directive) = config.log_filter.as_deref() else {
        return Ok(None);
    };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    if !interactive {
        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
        return Ok(installed.ok().map(|()| LogTarget::Stderr));
    }

    let Some(path) = config.resolved_log_file() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    Ok(installed.ok().map(|()| LogTarget::File(path)))
}
