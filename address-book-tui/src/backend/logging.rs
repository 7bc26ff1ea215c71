//! Log file setup
//!
//! The terminal is owned by the UI, so log output goes to a file in the
//! platform data directory instead of stderr. `log` records from the
//! libraries are forwarded into the same subscriber.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config_service::APP_DIR_NAME;

const LOG_FILE_NAME: &str = "address-book.log";

/// Log file location, if the platform has a data directory.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Install the global subscriber.
///
/// Level defaults to `info` and can be overridden with `RUST_LOG`. Without a
/// data directory, log output is discarded.
pub fn init_logging() -> Result<Option<PathBuf>> {
    let path = log_file_path();
    let writer = match &path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(log_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(path)
}

/// Filter built from `RUST_LOG`-style directives, `info` when none apply.
///
/// Invalid directives are skipped rather than rejected.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}
