//! Structured logging setup.
//!
//! Pretty output on stderr during development, JSON when requested, and an
//! optional non-blocking file sink with daily rotation. Everything is driven
//! by environment variables so the CLI surface stays uncluttered.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Configuration for logging setup.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log format: "json" or "pretty"
    pub format: LogFormat,
    /// Log output: "stdout", "stderr", or "file"
    pub output: LogOutput,
    /// Directory for log files (when output is "file")
    pub log_dir: PathBuf,
    /// Log file name prefix
    pub log_file_prefix: String,
    /// Default filter directive when RUST_LOG is unset
    pub default_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
    File,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            // The console listing owns stdout; logs stay out of its way.
            output: LogOutput::Stderr,
            log_dir: PathBuf::from("logs"),
            log_file_prefix: "enum-indexer".to_string(),
            default_filter: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(format) = env::var("ENUM_INDEXER_LOG_FORMAT") {
            config.format = match format.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            };
        }

        if let Ok(output) = env::var("ENUM_INDEXER_LOG_OUTPUT") {
            config.output = match output.to_lowercase().as_str() {
                "stdout" => LogOutput::Stdout,
                "file" => LogOutput::File,
                _ => LogOutput::Stderr,
            };
        }

        if let Ok(dir) = env::var("ENUM_INDEXER_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

/// Initialize the global subscriber. The returned guard must be held for the
/// lifetime of the process when file output is active, or buffered lines are
/// lost on exit.
pub fn init_logging(config: LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    match config.output {
        LogOutput::File => {
            let appender =
                tracing_appender::rolling::daily(&config.log_dir, &config.log_file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = match config.format {
                LogFormat::Json => fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .boxed(),
                LogFormat::Pretty => fmt::layer().with_writer(writer).with_ansi(false).boxed(),
            };
            tracing_subscriber::registry().with(filter).with(layer).init();
            Ok(Some(guard))
        }
        LogOutput::Stdout => {
            let layer = match config.format {
                LogFormat::Json => fmt::layer().json().with_writer(std::io::stdout).boxed(),
                LogFormat::Pretty => fmt::layer().with_writer(std::io::stdout).boxed(),
            };
            tracing_subscriber::registry().with(filter).with(layer).init();
            Ok(None)
        }
        LogOutput::Stderr => {
            let layer = match config.format {
                LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
                LogFormat::Pretty => fmt::layer().with_writer(std::io::stderr).boxed(),
            };
            tracing_subscriber::registry().with(filter).with(layer).init();
            Ok(None)
        }
    }
}
