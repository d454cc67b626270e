//! Time zone selection for date rendering.

use chrono::FixedOffset;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Which zone a date is rendered in
///
/// `Local` follows the host process, the other variants pin the output so it
/// is the same on every machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSetting {
    #[default]
    Local,
    Named(Tz),
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    pub fn utc() -> Self {
        TimeZoneSetting::Named(Tz::UTC)
    }
}

/// Parses `+HH:MM`, `+HHMM` or `+HH` (and the `-` forms)
fn parse_fixed_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl FromStr for TimeZoneSetting {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(TimeZoneSetting::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            return Ok(TimeZoneSetting::utc());
        }
        if trimmed.starts_with('+') || trimmed.starts_with('-') {
            return parse_fixed_offset(trimmed)
                .map(TimeZoneSetting::Fixed)
                .ok_or_else(|| FormatError::UnknownTimeZone {
                    name: s.to_string(),
                });
        }

        trimmed
            .parse::<Tz>()
            .map(TimeZoneSetting::Named)
            .map_err(|_| FormatError::UnknownTimeZone {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => f.write_str("local"),
            TimeZoneSetting::Named(tz) => f.write_str(tz.name()),
            TimeZoneSetting::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeZoneSetting> for String {
    fn from(setting: TimeZoneSetting) -> Self {
        setting.to_string()
    }
}
