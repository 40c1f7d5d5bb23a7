//! tracing setup for the kennel binary
//!
//! Logs go to `<logs dir>/kennel.log` when a logs directory is available,
//! otherwise to stderr. `RUST_LOG` overrides the default filter.

use config::PathManager;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},kennel_web=debug,kennel_core=info,kennel_gateway=debug",
            level
        ))
    })
}

/// Install the global subscriber. Keep the returned guard alive for as long
/// as file logging should be flushed.
pub fn init_logging(log_dir: Option<&Path>, level: &str) -> Option<WorkerGuard> {
    let Some(dir) = log_dir else {
        init_stderr_logging(level);
        return None;
    };

    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("[kennel] Failed to create log directory {:?}: {}", dir, e);
        init_stderr_logging(level);
        return None;
    }

    let path = dir.join(PathManager::log_file_name());
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path);

    match file {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let subscriber = tracing_subscriber::registry().with(default_filter(level)).with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            );

            match tracing::subscriber::set_global_default(subscriber) {
                Ok(()) => tracing::info!("Logging initialized, writing to {:?}", path),
                Err(e) => eprintln!("[kennel] Failed to set tracing subscriber: {}", e),
            }
            Some(guard)
        }
        Err(e) => {
            eprintln!("[kennel] Failed to open log file {:?}: {}", path, e);
            init_stderr_logging(level);
            None
        }
    }
}

fn init_stderr_logging(level: &str) {
    let subscriber = tracing_subscriber::registry().with(default_filter(level)).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true),
    );

    let _ = tracing::subscriber::set_global_default(subscriber);
}
