//! Conversion between the wire date-time representation (ISO-8601 UTC
//! instants) and the `datetime-local` input format forms edit
//! (`YYYY-MM-DDTHH:mm`). Display values are kept in UTC so a round trip
//! through a form never shifts the instant.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

/// Format accepted and produced by `datetime-local` inputs.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Wire instant to form input value.
pub fn to_input_value(dt: &DateTime<Utc>) -> String {
    dt.format(INPUT_FORMAT).to_string()
}

/// Form input value back to a wire instant. Malformed or empty input maps to
/// `None`, which submits the field as absent.
pub fn from_input_value(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(s, INPUT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Default pre-fill for the create form: now, truncated to the minute.
pub fn default_input_value() -> String {
    to_input_value(&Utc::now().trunc_subsecs(0))
}

/// Format shown on list and detail screens: `DD/MM/YY HH:mm`.
pub fn to_display(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn wire_to_input_and_back() {
        let instant = Utc.with_ymd_and_hms(2023, 1, 15, 8, 30, 0).unwrap();
        let display = to_input_value(&instant);
        assert_eq!(display, "2023-01-15T08:30");
        assert_eq!(from_input_value(&display), Some(instant));
    }

    #[test]
    fn seconds_are_dropped_on_display() {
        let instant = Utc.with_ymd_and_hms(2023, 1, 15, 8, 30, 42).unwrap();
        assert_eq!(to_input_value(&instant), "2023-01-15T08:30");
    }

    #[test]
    fn malformed_input_maps_to_none() {
        assert_eq!(from_input_value(""), None);
        assert_eq!(from_input_value("  "), None);
        assert_eq!(from_input_value("2023-01-15"), None);
        assert_eq!(from_input_value("not a date"), None);
    }

    #[test]
    fn display_format_is_short() {
        let instant = Utc.with_ymd_and_hms(2023, 1, 15, 8, 30, 0).unwrap();
        assert_eq!(to_display(&instant), "15/01/23 08:30");
    }

    #[test]
    fn default_value_parses() {
        assert!(from_input_value(&default_input_value()).is_some());
    }
}
