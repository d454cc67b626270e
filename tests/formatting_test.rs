//! Integration tests for the display formatting helpers
//!
//! Dates are rendered in a pinned zone so results do not depend on the host.

use ui_format::{
    format_date, format_date_with, format_rating, truncate_text, DateConfig, Rating,
    TimeZoneSetting,
};

fn utc() -> DateConfig {
    DateConfig {
        time_zone: TimeZoneSetting::utc(),
        ..DateConfig::default()
    }
}

fn has_short_date_shape(s: &str) -> bool {
    let Some((month_day, year)) = s.split_once(", ") else {
        return false;
    };
    let Some((month, day)) = month_day.split_once(' ') else {
        return false;
    };

    month.len() == 3
        && month.chars().all(|c| c.is_ascii_alphabetic())
        && (1..=2).contains(&day.len())
        && day.chars().all(|c| c.is_ascii_digit())
        && year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
}

#[test]
fn test_format_date_reference_example() {
    assert_eq!(format_date_with("2024-01-15T00:00:00Z", &utc()), "Jan 15, 2024");
}

#[test]
fn test_format_date_shape_for_valid_inputs() {
    let inputs = vec![
        "2024-01-15T00:00:00Z",
        "1999-12-31T23:59:59.999+01:00",
        "2000-02-29",
        "2024-06-01T08:15:00",
        "2031-10-09T12:00Z",
    ];

    for input in inputs {
        let formatted = format_date_with(input, &utc());
        assert!(has_short_date_shape(&formatted), "Bad shape for {}: {}", input, formatted);

        let local = format_date(input);
        assert!(has_short_date_shape(&local), "Bad local shape for {}: {}", input, local);
    }
}

#[test]
fn test_format_date_invalid_does_not_panic() {
    let inputs = vec!["not-a-date", "", "   ", "2024-13-01", "Jan 15, 2024", "12:00"];

    for input in inputs {
        assert_eq!(format_date(input), "Invalid Date", "Input: {:?}", input);
    }
}

#[test]
fn test_format_rating_reference_examples() {
    assert_eq!(format_rating(4.5), "4.5");
    assert_eq!(format_rating(4.0), "4.0");
    assert_eq!(format_rating(0), "0.0");
    assert_eq!(format_rating(None::<f64>), "0.0");
    assert_eq!(format_rating(Rating::Absent), "0.0");
    assert_eq!(format_rating(f64::NAN), "0.0");
    assert_eq!(format_rating(f64::INFINITY), "0.0");
}

#[test]
fn test_format_rating_stays_close_to_input() {
    let values = [0.04, 0.05, 0.96, 1.0, 2.345, 3.999, 4.75, 9.95, -1.25, 123.456, 1e6];

    for value in values {
        let formatted = format_rating(value);
        let parsed: f64 = formatted.parse().unwrap();
        assert!(
            (parsed - value).abs() <= 0.05 + 1e-9,
            "{} formatted as {}",
            value,
            formatted
        );
        assert_eq!(formatted.split('.').nth(1).map(str::len), Some(1));
    }
}

#[test]
fn test_format_rating_from_json_payload() {
    let payload = r#"[4.5, null, "n/a", 0, 3]"#;
    let ratings: Vec<Rating> = serde_json::from_str(payload).unwrap();
    let formatted: Vec<String> = ratings.into_iter().map(format_rating).collect();

    assert_eq!(formatted, vec!["4.5", "0.0", "0.0", "0.0", "3.0"]);
}

#[test]
fn test_truncate_text_reference_examples() {
    assert_eq!(truncate_text("hello", 10), "hello");
    assert_eq!(truncate_text("hello world", 5), "hello...");
    assert_eq!(truncate_text("  hello world  ", 7), "hello...");
    assert_eq!(truncate_text("", 5), "");
}

#[test]
fn test_truncate_text_no_op_when_within_bound() {
    let samples = ["a", "short text", "  spaced  ", "ünïcödé"];

    for sample in samples {
        let bound = sample.chars().count();
        assert_eq!(truncate_text(sample, bound), sample);
        assert_eq!(truncate_text(sample, bound + 3), sample);
    }
}

#[test]
fn test_helpers_are_deterministic() {
    let config = utc();
    assert_eq!(
        format_date_with("2024-03-01T12:00:00Z", &config),
        format_date_with("2024-03-01T12:00:00Z", &config)
    );
    assert_eq!(format_rating(3.3), format_rating(3.3));
    assert_eq!(truncate_text("repeatable text", 4), truncate_text("repeatable text", 4));
}
