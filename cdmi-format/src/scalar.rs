//! Parsing of text-form scalars (timestamps and sizes)

use crate::error::{CdmiError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y%m%dT%H%M%S%.f"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Parse an ISO-8601 timestamp into Unix seconds
///
/// Accepts the extended form (RFC 3339, `2012-01-12T14:33:12.5Z`,
/// `...+02:00`) and the basic form (`20120112T143312Z`, `...+0200`). A
/// date-time without offset is taken as UTC and a bare date as midnight UTC.
/// Fractional seconds are dropped.
pub fn parse_iso8601(text: &str) -> Result<i64> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.timestamp());
    }

    if let Ok(dt) = DateTime::parse_from_str(text, "%Y%m%dT%H%M%S%.f%z") {
        return Ok(dt.timestamp());
    }

    let naive = text
        .strip_suffix('Z')
        .or_else(|| text.strip_suffix('z'))
        .unwrap_or(text);

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Ok(dt.and_utc().timestamp());
        }
    }

    for format in DATE_FORMATS {
        if let Some(dt) = NaiveDate::parse_from_str(naive, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(dt.and_utc().timestamp());
        }
    }

    Err(CdmiError::InvalidValue(format!(
        "'{}' is not an ISO-8601 timestamp",
        text
    )))
}

/// Parse the leading unsigned integer of `text`, detecting the base
///
/// Leading whitespace and one `+` or `-` are skipped. `0x`/`0X` followed by
/// a hex digit selects hexadecimal, a leading `0` selects octal, anything
/// else is decimal. Parsing stops at the first character that is not a
/// digit of the base, so `"42bytes"` and `"4096.0"` read as 42 and 4096.
///
/// Never fails: no digits yields 0, overflow saturates to `u64::MAX` and a
/// leading `-` negates modulo 2^64.
pub fn parse_u64_auto(text: &str) -> u64 {
    let text = text.trim_start_matches(|c: char| {
        matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
    });

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let bytes = unsigned.as_bytes();
    let (digits, radix) = if bytes.len() > 2
        && bytes[0] == b'0'
        && matches!(bytes[1], b'x' | b'X')
        && bytes[2].is_ascii_hexdigit()
    {
        (&unsigned[2..], 16)
    } else if bytes.first() == Some(&b'0') {
        (unsigned, 8)
    } else {
        (unsigned, 10)
    };

    let mut value: u64 = 0;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        match value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(next) => value = next,
            None => return u64::MAX,
        }
    }

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}
