use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

pub mod time_zone;

pub use time_zone::TimeZoneSetting;

/// Supported display locales
///
/// Only United States English is rendered. The type exists so callers pass
/// the locale explicitly instead of relying on process-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    EnUs,
}

impl Locale {
    /// Get locale tag (BCP 47)
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
        }
    }

    /// Get all supported locales
    pub fn all() -> Vec<Locale> {
        vec![Locale::EnUs]
    }

    /// Parse locale from tag, accepting `_` as separator and any casing
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().replace('_', "-").to_lowercase().as_str() {
            "en" | "en-us" => Some(Locale::EnUs),
            _ => None,
        }
    }

    /// chrono pattern for the short date style: "Jan 15, 2024"
    pub fn short_date_pattern(&self) -> &'static str {
        match self {
            Locale::EnUs => "%b %-d, %Y",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| FormatError::UnsupportedLocale {
            code: s.to_string(),
        })
    }
}

impl TryFrom<String> for Locale {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code().to_string()
    }
}
