use thiserror::Error;

/// Errors raised by the configurable surface of ui-format.
///
/// The formatting helpers themselves never fail: unusable input degrades to a
/// placeholder or fallback string. Only loading configuration, parsing locale
/// and zone names, and installing the log subscriber can go wrong.
#[derive(Error, Debug)]
pub enum FormatError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file: {path}")]
    InvalidConfig {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    // Locale and zone errors
    #[error("Unsupported locale: {code}")]
    UnsupportedLocale { code: String },

    #[error("Unknown time zone: {name}")]
    UnknownTimeZone { name: String },

    // Logging errors
    #[error("Logging setup failed: {message}")]
    Logging { message: String },

    // System errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),
}

impl FormatError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create a logging error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging { message: message.into() }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration { .. } | Self::InvalidConfig { .. } => "configuration",
            Self::UnsupportedLocale { .. } | Self::UnknownTimeZone { .. } => "i18n",
            Self::Logging { .. } => "logging",
            Self::Io(_) | Self::Serialization(_) => "system",
        }
    }
}

/// Result type alias for ui-format
pub type Result<T> = std::result::Result<T, FormatError>;
