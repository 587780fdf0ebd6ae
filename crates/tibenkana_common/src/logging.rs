//! Logging setup shared by the booking binaries.
//!
//! Everything logs through `tracing`. The subscriber writes to stdout and,
//! when a log directory is configured, to a daily rolling file as well.

use std::str::FromStr;

use tibenkana_config::LoggingConfig;
use tracing::{error, info, warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix of the rolling log files.
pub const LOG_FILE_PREFIX: &str = "tibenkana.log";

/// Initialize the tracing subscriber at INFO.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level, stdout only.
pub fn init_with_level(level: Level) {
    // stdout only, so there is no guard to keep
    let _ = install(level, None);
}

/// Initialize logging from the `[logging]` config section.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_from_config(config: &LoggingConfig) -> Option<WorkerGuard> {
    let level = parse_level(config.level.as_deref());
    install(level, config.directory.as_deref())
}

/// Parse a level name, falling back to INFO.
pub fn parse_level(level: Option<&str>) -> Level {
    match level.map(str::trim).filter(|l| !l.is_empty()) {
        None => Level::INFO,
        Some(name) => Level::from_str(name).unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using info", name);
            Level::INFO
        }),
    }
}

fn install(level: Level, directory: Option<&str>) -> Option<WorkerGuard> {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("tibenkana={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    let (file_layer, guard) = match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // try_init: tests and embedding binaries may have set a subscriber already
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(file_layer)
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
        if let Some(dir) = directory {
            info!("Writing logs to {}/{}.*", dir, LOG_FILE_PREFIX);
        }
    }
    guard
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
