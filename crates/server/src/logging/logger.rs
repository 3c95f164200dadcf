use rolling_file::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
}

/// Initialize tracing/logging with the specified configuration
///
/// # Log Rotation
/// When a log file reaches `write_max_file_size`, it is rotated:
/// - Current: logs.log
/// - After rotation: logs.log.1, logs.log.2, etc.
/// - Keeps up to `write_max_files` rotated files
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(config.level).map_err(|source| LoggingError::InvalidLogLevel {
        level: config.level.to_string(),
        source,
    })?;

    let registry = tracing_subscriber::registry();

    if config.write_to_file {
        // Ensure log directory exists
        std::fs::create_dir_all(config.write_path)?;

        let log_file_path = PathBuf::from(config.write_path).join("logs.log");
        // write_max_files includes the current file, so subtract 1 for rotated files count
        // e.g., if write_max_files=5: logs.log (current) + logs.log.{1,2,3,4} (4 rotated)
        let rotated_files_count = config.write_max_files.saturating_sub(1);
        let file_appender = BasicRollingFileAppender::new(
            log_file_path,
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            rotated_files_count,
        )?;

        let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

        // The guard must live for the lifetime of the program or buffered
        // lines are lost on shutdown
        std::mem::forget(_guard);

        if config.json_format {
            let console_layer = fmt::layer().json();
            let file_layer = fmt::layer().json().with_writer(non_blocking);

            registry
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .init();
        } else {
            let console_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(!config.strip_ansi);

            let file_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false) // Never use ANSI in files
                .with_writer(non_blocking);

            registry
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .init();
        }
    } else if config.json_format {
        let fmt_layer = fmt::layer().json();
        registry.with(filter).with(fmt_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);

        registry.with(filter).with(fmt_layer).init();
    }

    Ok(())
}
