use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{FormatError, Result};
use crate::i18n::{Locale, TimeZoneSetting};
use crate::logging::LoggingConfig;
use crate::utils::INVALID_DATE;

/// Formatter configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub date: DateConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// How dates are rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    pub locale: Locale,
    pub time_zone: TimeZoneSetting,
    pub invalid_placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_text_length: usize,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            locale: Locale::EnUs,
            time_zone: TimeZoneSetting::Local,
            invalid_placeholder: INVALID_DATE.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { max_text_length: 100 }
    }
}

impl FormatterConfig {
    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        let config_path = get_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: FormatterConfig =
            toml::from_str(&content).map_err(|source| FormatError::InvalidConfig {
                path: path.display().to_string(),
                source,
            })?;

        config.validate()?;

        info!(path = %path.display(), "Configuration loaded successfully");
        Ok(config)
    }

    /// Save configuration to specific file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.date.invalid_placeholder.is_empty() {
            return Err(FormatError::config("date.invalid_placeholder must not be empty"));
        }

        if self.logging.level.trim().is_empty() {
            return Err(FormatError::config("logging.level must not be empty"));
        }

        Ok(())
    }
}

/// Get the configuration file path
pub fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "uiformat", "uifmt")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

/// Environment-based configuration overrides
pub struct ConfigOverrides;

impl ConfigOverrides {
    /// Apply environment variable overrides to configuration
    pub fn apply(config: &mut FormatterConfig) {
        Self::apply_from(config, |key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup; unparseable values are ignored
    pub fn apply_from<F>(config: &mut FormatterConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup("UIFMT_LOCALE") {
            match locale.parse::<Locale>() {
                Ok(locale) => config.date.locale = locale,
                Err(e) => warn!("Ignoring UIFMT_LOCALE: {}", e),
            }
        }

        if let Some(zone) = lookup("UIFMT_TIME_ZONE") {
            match zone.parse::<TimeZoneSetting>() {
                Ok(zone) => config.date.time_zone = zone,
                Err(e) => warn!("Ignoring UIFMT_TIME_ZONE: {}", e),
            }
        }

        if let Some(level) = lookup("UIFMT_LOG_LEVEL") {
            config.logging.level = level;
        }
    }
}
