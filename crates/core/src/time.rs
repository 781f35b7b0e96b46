use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// A simple clock abstraction for deterministic time in services and tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// Formats a completion timestamp the way entries are stored.
///
/// RFC 3339 in UTC. Sub-second precision is kept when present, so entries
/// completed within the same second still order correctly.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses a stored completion timestamp.
///
/// Accepts RFC 3339 with any offset, and naive ISO-8601 date-times (with a
/// `T` or a space separator, optional fractional seconds) which are read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Deterministic timestamp for tests and examples (2024-01-01T10:00:00Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_704_103_200;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_seconds_without_fraction() {
        assert_eq!(format_timestamp(fixed_now()), "2024-01-01T10:00:00Z");
    }

    #[test]
    fn keeps_sub_second_precision() {
        let at = fixed_now() + chrono::Duration::microseconds(250_500);
        let formatted = format_timestamp(at);
        assert_eq!(formatted, "2024-01-01T10:00:00.250500Z");
        assert_eq!(parse_timestamp(&formatted), Some(at));
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_timestamp("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed, fixed_now());
    }

    #[test]
    fn parses_naive_iso_as_utc() {
        assert_eq!(parse_timestamp("2024-01-01T10:00:00"), Some(fixed_now()));
        assert_eq!(parse_timestamp("2024-01-01 10:00:00"), Some(fixed_now()));
        let fractional = parse_timestamp("2024-01-01T10:00:00.123456").unwrap();
        assert_eq!(fractional.timestamp(), FIXED_TEST_TIMESTAMP);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp("yesterday-ish"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn fixed_clock_does_not_move() {
        let clock = fixed_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), fixed_now());
    }
}
