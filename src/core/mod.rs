use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

use crate::config::FormatterConfig;
use crate::error::Result;
use crate::utils::{format_date_with, format_rating, truncate_text, Rating};

/// Formatting helpers bound to one configuration
///
/// Lets a display layer pick locale, zone and default text length once
/// instead of passing them on every call. Cheap to clone and share.
#[derive(Debug, Clone, Default)]
pub struct DisplayFormatter {
    config: FormatterConfig,
}

impl DisplayFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        debug!(
            locale = %config.date.locale,
            time_zone = %config.date.time_zone,
            "Display formatter created"
        );
        Self { config }
    }

    /// Create a formatter from a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(FormatterConfig::load_from_file(path)?))
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// "Jan 15, 2024" in the configured locale and zone
    pub fn date(&self, iso_string: &str) -> String {
        format_date_with(iso_string, &self.config.date)
    }

    pub fn rating(&self, rating: impl Into<Rating>) -> String {
        format_rating(rating)
    }

    pub fn truncate<'a>(&self, text: &'a str, max_length: usize) -> Cow<'a, str> {
        truncate_text(text, max_length)
    }

    /// Truncate to the configured `display.max_text_length`
    pub fn truncate_default<'a>(&self, text: &'a str) -> Cow<'a, str> {
        truncate_text(text, self.config.display.max_text_length)
    }
}
