//! ui-format - display formatting helpers for a user interface layer
//!
//! This library provides:
//! - Short date rendering of ISO 8601 strings ("Jan 15, 2024")
//! - One-decimal rating rendering with a "0.0" fallback
//! - Character-safe text truncation with an ellipsis
//! - Explicit locale and time zone configuration

pub mod core;
pub mod config;
pub mod utils;
pub mod error;
pub mod logging;
pub mod i18n;

// Re-export main types for convenience
pub use crate::core::DisplayFormatter;
pub use crate::config::{DateConfig, FormatterConfig};
pub use crate::error::{FormatError, Result};
pub use crate::i18n::{Locale, TimeZoneSetting};
pub use crate::utils::{format_date, format_date_with, format_rating, truncate_text, Rating};
