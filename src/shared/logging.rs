//! tracing subscriber setup for the CLI.
//!
//! Console output is filtered by the numeric verbosity level (10 = DEBUG,
//! 20 = INFO, 30 = WARNING, 40 = ERROR, 50 = CRITICAL) unless `RUST_LOG` is
//! set. An optional log file always receives debug-level JSON records.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Default console verbosity (INFO).
pub const DEFAULT_VERBOSITY: u8 = 20;

/// Keeps the log file writer alive; flushes on drop.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Map a numeric verbosity level to a tracing level.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0..=10 => LevelFilter::DEBUG,
        11..=20 => LevelFilter::INFO,
        21..=30 => LevelFilter::WARN,
        _ => LevelFilter::ERROR,
    }
}

fn console_filter(verbosity: u8) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = level_for(verbosity);
            EnvFilter::new(format!("warn,gpreplicator={level},gpr={level}"))
        }
    }
}

/// Install the global subscriber.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> anyhow::Result<LogGuard> {
    let console = fmt::layer()
        .with_target(false)
        .with_filter(console_filter(verbosity));

    let (file_layer, file_guard) = match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new("warn,gpreplicator=debug,gpr=debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(LogGuard { _file: file_guard })
}
