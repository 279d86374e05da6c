//! Text format predicates
//!
//! Email, UUID and ISO-8601 date checks. Each rejects non-text values with a
//! `type_mismatch` error before looking at the format.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::{Captures, Regex};
use serde_json::Value;

use crate::foundation::{ValidationError, kind_of};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).expect("email pattern is valid")
});

/// `2021-03`, `2021-03-01`, `2021-03-01T12:30`, `2021-03-01 12:30:00,5+0200`.
static ISO_EXTENDED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})(?:-(?P<day>[0-9]{2})(?:[T ](?P<hour>[0-9]{2}):(?P<minute>[0-9]{2})(?::(?P<second>[0-9]{2}))?(?:[.,][0-9]+)?(?:Z|[+-](?P<offset_hour>[0-9]{2})(?::?(?P<offset_minute>[0-9]{2}))?)?)?)?$",
    )
    .expect("extended ISO-8601 pattern is valid")
});

/// `20210301`, `20210301T1230`, `20210301T123000.5Z`, `20210301T123000+0200`.
static ISO_BASIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<year>[0-9]{4})(?P<month>[0-9]{2})(?P<day>[0-9]{2})(?:T(?P<hour>[0-9]{2})(?P<minute>[0-9]{2})(?P<second>[0-9]{2})?(?:[.,][0-9]+)?(?:Z|[+-](?P<offset_hour>[0-9]{2})(?P<offset_minute>[0-9]{2})?)?)?$",
    )
    .expect("basic ISO-8601 pattern is valid")
});

fn type_error(expected: &'static str, input: &Value) -> ValidationError {
    ValidationError::type_mismatch(expected, kind_of(input))
}

fn is_uuid_v1_or_v4(text: &str) -> bool {
    // Only the hyphenated form is 36 chars; braced, urn and simple forms are not.
    text.len() == 36
        && uuid::Uuid::try_parse(text).is_ok_and(|id| {
            matches!(id.get_version_num(), 1 | 4) && id.get_variant() == uuid::Variant::RFC4122
        })
}

fn field<T: std::str::FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

/// The grammar only checks shape; calendar and clock ranges are checked here.
fn iso_fields_in_range(caps: &Captures<'_>) -> bool {
    let (Some(year), Some(month)) = (field::<i32>(caps, "year"), field::<u32>(caps, "month"))
    else {
        return false;
    };
    let day = field::<u32>(caps, "day").unwrap_or(1);
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return false;
    }

    if let (Some(hour), Some(minute)) = (field::<u32>(caps, "hour"), field::<u32>(caps, "minute"))
    {
        let second = field::<u32>(caps, "second").unwrap_or(0);
        if NaiveTime::from_hms_opt(hour, minute, second).is_none() {
            return false;
        }
    }

    field::<u32>(caps, "offset_hour").is_none_or(|h| h <= 23)
        && field::<u32>(caps, "offset_minute").is_none_or(|m| m <= 59)
}

fn is_iso_date(text: &str) -> bool {
    ISO_EXTENDED_REGEX
        .captures(text)
        .or_else(|| ISO_BASIC_REGEX.captures(text))
        .is_some_and(|caps| iso_fields_in_range(&caps))
}

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates email format: local part, `@`, and a dotted domain.
    pub Email for Value;
    rule(input) { input.as_str().is_some_and(|text| EMAIL_REGEX.is_match(text)) }
    error(input) {
        if input.is_string() {
            ValidationError::invalid_format("email")
        } else {
            type_error("string", input)
        }
    }
    fn email();
}

// ============================================================================
// UUID
// ============================================================================

crate::validator! {
    /// Validates hyphenated UUIDs of version 1 or 4.
    pub Uuid for Value;
    rule(input) { input.as_str().is_some_and(is_uuid_v1_or_v4) }
    error(input) {
        if input.is_string() {
            ValidationError::invalid_format("uuid").with_param("versions", "1,4")
        } else {
            type_error("string", input)
        }
    }
    fn uuid();
}

// ============================================================================
// ISO-8601 DATE
// ============================================================================

crate::validator! {
    /// Validates ISO-8601 dates and date-times.
    ///
    /// Accepts calendar dates and year-months in extended (`2021-03-01`,
    /// `2021-03`) or basic (`20210301`) format, optionally followed by a time
    /// of at least minute precision. Times take a `.` or `,` fraction and an
    /// optional `Z`, `+hh`, `+hhmm` or `+hh:mm` zone.
    pub DateIso for Value;
    rule(input) { input.as_str().is_some_and(is_iso_date) }
    error(input) {
        if input.is_string() {
            ValidationError::invalid_format("iso8601")
        } else {
            type_error("string", input)
        }
    }
    fn date_iso();
}

// ============================================================================
// TESTS
// ============================================================================
