//! Rating formatting for display.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use tracing::trace;

/// Shown for a rating that is missing, not a number, infinite, or zero
pub const RATING_FALLBACK: &str = "0.0";

/// A rating as received from a caller: a number or nothing
///
/// Zero counts as "no rating", so `Present(0.0)` renders the same as `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rating {
    Present(f64),
    #[default]
    Absent,
}

impl Rating {
    /// The value if it can be shown: present, finite and non-zero
    pub fn displayable(&self) -> Option<f64> {
        match *self {
            Rating::Present(value) if value.is_finite() && value != 0.0 => Some(value),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Rating::Present(_))
    }
}

impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        Rating::Present(value)
    }
}

impl From<f32> for Rating {
    fn from(value: f32) -> Self {
        Rating::Present(f64::from(value))
    }
}

impl From<i32> for Rating {
    fn from(value: i32) -> Self {
        Rating::Present(f64::from(value))
    }
}

impl From<u32> for Rating {
    fn from(value: u32) -> Self {
        Rating::Present(f64::from(value))
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Rating::Present(value as f64)
    }
}

impl<T: Into<Rating>> From<Option<T>> for Rating {
    fn from(value: Option<T>) -> Self {
        value.map_or(Rating::Absent, Into::into)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Present(value) => serializer.serialize_f64(*value),
            Rating::Absent => serializer.serialize_none(),
        }
    }
}

struct RatingVisitor;

/// Numbers become `Present`; any other value (null, text, bool, list,
/// object) is accepted and becomes `Absent`.
impl<'de> Visitor<'de> for RatingVisitor {
    type Value = Rating;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a numeric rating or any non-numeric value")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Rating, E> {
        Ok(Rating::Present(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Rating, E> {
        Ok(Rating::Present(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Rating, E> {
        Ok(Rating::Present(value as f64))
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Rating, E> {
        Ok(Rating::Absent)
    }

    fn visit_str<E: de::Error>(self, _value: &str) -> Result<Rating, E> {
        Ok(Rating::Absent)
    }

    fn visit_bytes<E: de::Error>(self, _value: &[u8]) -> Result<Rating, E> {
        Ok(Rating::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Rating, E> {
        Ok(Rating::Absent)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Rating, E> {
        Ok(Rating::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Rating, D::Error> {
        Rating::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Rating, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Rating::Absent)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Rating, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Rating::Absent)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RatingVisitor)
    }
}

/// Format a rating with exactly one decimal place, e.g. "4.5"
///
/// Rounds the exact binary value to nearest (ties to even), as `{:.1}` does.
/// Missing, non-finite and zero ratings all yield [`RATING_FALLBACK`].
pub fn format_rating(rating: impl Into<Rating>) -> String {
    let rating = rating.into();
    match rating.displayable() {
        Some(value) => format!("{:.1}", value),
        None => {
            trace!(?rating, "Rating not displayable, using fallback");
            RATING_FALLBACK.to_string()
        }
    }
}
