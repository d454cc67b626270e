use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{FormatError, Result};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console_enabled: bool,
    pub file_enabled: bool,
    pub log_directory: PathBuf,
    pub max_files: usize,
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            console_enabled: true,
            file_enabled: false,
            log_directory: PathBuf::from("logs"),
            max_files: 5,
            include_targets: true,
        }
    }
}

/// Build the level filter: `RUST_LOG` wins, then the configured level
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging system
///
/// Console output goes to stderr so stdout stays clean for formatted values.
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_filter(&config.level);

    let mut layers = Vec::new();

    // Console layer
    if config.console_enabled {
        let console_layer = fmt::layer()
            .with_target(config.include_targets)
            .with_writer(std::io::stderr)
            .boxed();

        layers.push(console_layer);
    }

    // File layer
    if config.file_enabled {
        std::fs::create_dir_all(&config.log_directory)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("uifmt")
            .filename_suffix("log")
            .max_log_files(config.max_files)
            .build(&config.log_directory)
            .map_err(|e| FormatError::logging(e.to_string()))?;

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_target(config.include_targets)
            .with_writer(file_appender)
            .boxed();

        layers.push(file_layer);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .map_err(|e| FormatError::logging(e.to_string()))?;

    info!(
        level = %config.level,
        console = config.console_enabled,
        file = config.file_enabled,
        "Logging system initialized"
    );

    Ok(())
}
