//! Formatting helpers for the display layer
//!
//! Each helper is a pure function of its arguments: no shared state, safe to
//! call from any thread, and never fails. Unusable input yields a fixed
//! placeholder or fallback string instead of an error.

pub mod date_utils;
pub mod number_utils;
pub mod string_utils;

pub use date_utils::{format_date, format_date_with, parse_iso8601, ParsedMoment, INVALID_DATE};
pub use number_utils::{format_rating, Rating, RATING_FALLBACK};
pub use string_utils::{truncate_text, ELLIPSIS};
