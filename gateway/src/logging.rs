//! Logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

/// Initialize the logging system.
///
/// Sets up:
/// - An `EnvFilter` from the configured level (default `gateway=info,warn`)
/// - Human-readable or JSON output on stderr
/// - Optional daily-rotated log file (`gateway.log`) in `log_dir`
///
/// Returns the file writer guard when file logging is active; keep it alive
/// for the lifetime of the program so buffered lines are flushed. Calling
/// this twice is harmless: the second call leaves the first subscriber in
/// place and returns `None`.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| EnvFilter::new("gateway=info,warn"));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => match fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, "gateway.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_ansi(false); // No ANSI codes in log files
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log directory: {}", e);
                (None, None)
            }
        },
        None => (None, None),
    };

    let json_layer = config
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
    });

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init();

    if installed.is_err() {
        return None;
    }

    tracing::info!(
        log_level = %config.level,
        log_dir = ?config.log_dir,
        json = config.json,
        "Logging initialized"
    );

    guard
}
