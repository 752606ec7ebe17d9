use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Characters of a raw timestamp shown when no format matches
const RAW_DISPLAY_CHARS: usize = 16;

const DISPLAY_FORMAT: &str = "%b %d %H:%M";
const SORTABLE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f+00:00";

/// Display and sort forms of a session header timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTimestamp {
    /// e.g. `Dec 01 10:30`, in the timestamp's own offset
    pub display: String,
    /// UTC with a fixed-width fraction, so lexical order is chronological.
    /// Falls back to the raw string, which only sorts lexically.
    pub sortable: String,
}

type TimestampParser = fn(&str) -> Option<DateTime<FixedOffset>>;

/// Accepted formats, tried in order
const PARSERS: &[TimestampParser] = &[parse_utc_with_fraction, parse_with_offset];

/// `2025-12-01T10:30:00.123456Z`
fn parse_utc_with_fraction(raw: &str) -> Option<DateTime<FixedOffset>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.fZ")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// `2025-12-01T10:30:00+0200`
fn parse_with_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z").ok()
}

/// Format a header timestamp for display and sorting
pub fn format_session_timestamp(raw: &str) -> SessionTimestamp {
    match PARSERS.iter().find_map(|parse| parse(raw)) {
        Some(parsed) => SessionTimestamp {
            display: parsed.format(DISPLAY_FORMAT).to_string(),
            sortable: parsed.with_timezone(&Utc).format(SORTABLE_FORMAT).to_string(),
        },
        None => SessionTimestamp {
            display: crate::utils::truncate_chars(raw, RAW_DISPLAY_CHARS).to_string(),
            sortable: raw.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_millis_timestamp() {
        let ts = format_session_timestamp("2025-12-01T10:30:00.000Z");
        assert_eq!(ts.display, "Dec 01 10:30");
        assert_eq!(ts.sortable, "2025-12-01T10:30:00.000000+00:00");
    }

    #[test]
    fn test_utc_micros_timestamp() {
        let ts = format_session_timestamp("2024-03-09T08:05:59.123456Z");
        assert_eq!(ts.display, "Mar 09 08:05");
        assert_eq!(ts.sortable, "2024-03-09T08:05:59.123456+00:00");
    }

    #[test]
    fn test_offset_timestamp_displays_local_and_sorts_utc() {
        let ts = format_session_timestamp("2025-12-01T12:30:00+0200");
        assert_eq!(ts.display, "Dec 01 12:30");
        assert_eq!(ts.sortable, "2025-12-01T10:30:00.000000+00:00");
    }

    #[test]
    fn test_sortable_is_chronological_across_formats() {
        let earlier = format_session_timestamp("2025-12-01T10:29:59.999Z");
        let later = format_session_timestamp("2025-12-01T11:30:00+0100");
        let latest = format_session_timestamp("2025-12-01T10:30:00.500Z");
        assert!(earlier.sortable < later.sortable);
        assert!(later.sortable < latest.sortable);
    }

    #[test]
    fn test_unrecognized_timestamp_falls_back_to_raw() {
        let ts = format_session_timestamp("sometime last tuesday afternoon");
        assert_eq!(ts.display, "sometime last tu");
        assert_eq!(ts.sortable, "sometime last tuesday afternoon");
    }

    #[test]
    fn test_short_and_empty_raw_timestamps() {
        let ts = format_session_timestamp("2025-12-01");
        assert_eq!(ts.display, "2025-12-01");
        assert_eq!(ts.sortable, "2025-12-01");

        let ts = format_session_timestamp("");
        assert_eq!(ts.display, "");
        assert_eq!(ts.sortable, "");
    }
}
