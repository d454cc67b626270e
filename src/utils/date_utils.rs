//! Date formatting for display.
//!
//! Input is an ISO 8601 string as sent by an API; output is the short
//! human-readable form shown in lists and cards, e.g. "Jan 15, 2024".

use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use std::fmt;
use tracing::debug;

use crate::config::DateConfig;
use crate::i18n::TimeZoneSetting;

/// Rendered in place of a date that could not be parsed
pub const INVALID_DATE: &str = "Invalid Date";

const FLOATING_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// A parsed ISO 8601 value before it is placed in a display zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedMoment {
    /// An instant: carried an offset, a `Z`, or was a date-only form (UTC)
    Absolute(DateTime<FixedOffset>),
    /// A wall-clock time without offset, read in the display zone
    Floating(NaiveDateTime),
}

impl ParsedMoment {
    /// Resolve against a zone; `None` only if the instant is out of range
    fn resolve<Z: TimeZone>(&self, zone: &Z) -> Option<DateTime<Z>> {
        match self {
            ParsedMoment::Absolute(instant) => Some(instant.with_timezone(zone)),
            ParsedMoment::Floating(naive) => zone
                .from_local_datetime(naive)
                .earliest()
                .or_else(|| {
                    // skipped by a DST transition: move past the gap
                    let shifted = naive.checked_add_signed(Duration::hours(1))?;
                    zone.from_local_datetime(&shifted).earliest()
                }),
        }
    }
}

fn utc_midnight(date: NaiveDate) -> Option<ParsedMoment> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(ParsedMoment::Absolute(
        Utc.from_utc_datetime(&midnight).fixed_offset(),
    ))
}

/// Date-only forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
fn parse_date_only(input: &str) -> Option<ParsedMoment> {
    fn all_digits(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
    }

    let parts: Vec<&str> = input.split('-').collect();

    let date = match parts.as_slice() {
        [year] if year.len() == 4 && all_digits(year) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1)?
        }
        [year, month] if year.len() == 4 && month.len() == 2 && all_digits(year) && all_digits(month) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?
        }
        [_, _, _] => NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?,
        _ => return None,
    };

    utc_midnight(date)
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    FLOATING_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}

/// Parse the ISO 8601 forms a browser `Date` accepts
///
/// Date-only values are read as UTC midnight, date-times without an offset
/// as wall-clock time in whatever zone they are later rendered in.
pub fn parse_iso8601(input: &str) -> Option<ParsedMoment> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Some(ParsedMoment::Absolute(instant));
    }

    if let Some(stripped) = input.strip_suffix(['Z', 'z']) {
        return parse_naive(stripped)
            .map(|naive| ParsedMoment::Absolute(Utc.from_utc_datetime(&naive).fixed_offset()));
    }

    if let Some(instant) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(input, format).ok())
    {
        return Some(ParsedMoment::Absolute(instant));
    }

    if let Some(naive) = parse_naive(input) {
        return Some(ParsedMoment::Floating(naive));
    }

    parse_date_only(input)
}

fn render_in<Z>(moment: &ParsedMoment, zone: &Z, pattern: &str) -> Option<String>
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    moment
        .resolve(zone)
        .map(|local| local.format(pattern).to_string())
}

/// Render a parsed value in the configured zone and locale
pub fn render_moment(moment: &ParsedMoment, config: &DateConfig) -> Option<String> {
    let pattern = config.locale.short_date_pattern();

    match config.time_zone {
        TimeZoneSetting::Local => render_in(moment, &Local, pattern),
        TimeZoneSetting::Named(tz) => render_in(moment, &tz, pattern),
        TimeZoneSetting::Fixed(offset) => render_in(moment, &offset, pattern),
    }
}

/// Format an ISO 8601 string as "Jan 15, 2024" using the given configuration
///
/// Never fails: unparseable input yields `config.invalid_placeholder`.
pub fn format_date_with(iso_string: &str, config: &DateConfig) -> String {
    match parse_iso8601(iso_string).and_then(|moment| render_moment(&moment, config)) {
        Some(formatted) => formatted,
        None => {
            debug!(input = iso_string, "Unparseable date, using placeholder");
            config.invalid_placeholder.clone()
        }
    }
}

/// Format an ISO 8601 string as "Jan 15, 2024" in the process-local zone
pub fn format_date(iso_string: &str) -> String {
    format_date_with(iso_string, &DateConfig::default())
}
