//! Display helpers shared by tracking and rate estimation.

use time::{macros::format_description, Date};

/// Formats a calendar date as `Feb 15, 2024`. Missing dates render empty.
pub fn format_date(date: Option<Date>) -> String {
    let Some(date) = date else {
        return String::new();
    };
    date.format(format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_default()
}

/// Turns a hyphenated status token into a title-cased phrase:
/// `out-for-delivery` becomes `Out For Delivery`.
pub fn format_status_label(token: &str) -> String {
    token
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

pub fn format_weight(kilograms: f64) -> String {
    format!("{kilograms} kg")
}

pub fn format_days(days: i64) -> String {
    format!("{days} days")
}

/// Trims and uppercases a raw tracking id.
pub fn normalize_tracking_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Keeps digits and decimal points, as typed into the weight field.
pub fn sanitize_weight(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect()
}

/// Keeps digits only, as typed into the distance field.
pub fn sanitize_distance(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Reads the longest numeric prefix of `raw`, falling back to zero when
/// nothing parses. An optional sign, digits and points are followed by an
/// optional exponent: `"12.5kg"` reads as 12.5, `"1e3"` as 1000, `"abc"` and
/// `""` as 0.
pub fn parse_lenient(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut seen_digit = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' => {}
            _ => break,
        }
        end += 1;
    }
    if seen_digit && matches!(bytes.get(end), Some(b'e' | b'E')) {
        end += 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }
    let candidate = &trimmed[..end];

    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
