use std::env;
use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs to stdout and to a daily-rotated file under `logs/`, info level
/// unless overridden through `RUST_LOG` or `LOG_LEVEL`.
///
/// The returned guard must stay alive for the file writer to flush.
pub fn init_logging() -> WorkerGuard {
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(level.to_lowercase()),
    };

    fs::create_dir_all("logs").ok();
    let file_appender = rolling::daily("logs", "homework-bot.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().with_writer(file_writer).with_ansi(false);
    let stdout_layer = fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
