//! Minute-resolution time helpers shared by ingestion, aggregation and the
//! timeline.

use chrono::{DateTime, Duration, DurationRound, FixedOffset, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::validation::validate_duration;

/// Truncate a timestamp to the start of its minute (seconds and
/// sub-second components zeroed).
pub fn truncate_to_minute(ts: Timestamp) -> Result<Timestamp, CoreError> {
    ts.duration_trunc(Duration::minutes(1))
        .map_err(|e| CoreError::Internal(format!("Cannot truncate {ts} to minute: {e}")))
}

/// Formats accepted for timestamps that carry no UTC offset.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a client-supplied timestamp.
///
/// RFC 3339 values keep their offset and are converted to UTC. Values
/// without an offset are read as UTC, matching how reports are stored.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    if let Ok(ts) = raw.parse::<DateTime<FixedOffset>>() {
        return Ok(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoreError::Validation(format!("invalid timestamp: {raw:?}")))
}

/// Add a (possibly large) number of minutes to a timestamp.
///
/// Overflow of either the duration or the resulting date is reported as a
/// validation error naming `field`.
pub fn add_minutes(ts: Timestamp, minutes: i64, field: &str) -> Result<Timestamp, CoreError> {
    Duration::try_minutes(minutes)
        .and_then(|delta| ts.checked_add_signed(delta))
        .ok_or_else(|| CoreError::Validation(format!("{field} is out of range: {minutes} minutes")))
}

/// A half-open time range `[start, end)`.
///
/// `end` may precede `start`; such a window contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeWindow {
    /// Build the window `[start, start + duration_minutes)`.
    pub fn from_duration(start: Timestamp, duration_minutes: i64) -> Result<Self, CoreError> {
        validate_duration(duration_minutes)?;
        let end = add_minutes(start, duration_minutes, "duration")?;
        Ok(Self { start, end })
    }

    /// Whether `ts` falls inside the window (inclusive start, exclusive end).
    pub fn contains(&self, ts: Timestamp) -> bool {
        self.start <= ts && ts < self.end
    }

    /// Whether the window covers no instant at all.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Number of whole-minute slots starting at `start` that begin before
    /// `end`. A partial trailing minute counts as a slot.
    pub fn minute_slots(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        let span = self.end - self.start;
        let whole = span.num_minutes();
        if span > Duration::minutes(whole) {
            whole + 1
        } else {
            whole
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Timelike, Utc};

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2023, 5, 26, h, m, s).unwrap()
    }

    #[test]
    fn truncation_zeroes_seconds_and_nanos() {
        let ts = at(8, 28, 36).with_nanosecond(123_456_789).unwrap();
        let truncated = truncate_to_minute(ts).unwrap();
        assert_eq!(truncated, at(8, 28, 0));
        assert_eq!(truncated.second(), 0);
        assert_eq!(truncated.nanosecond(), 0);
    }

    #[test]
    fn truncation_is_idempotent() {
        assert_eq!(truncate_to_minute(at(8, 0, 0)).unwrap(), at(8, 0, 0));
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(parse_timestamp("2023-05-26T08:00:00Z").unwrap(), at(8, 0, 0));
        assert_eq!(parse_timestamp("2023-05-26T10:00:00+02:00").unwrap(), at(8, 0, 0));
    }

    #[test]
    fn naive_timestamp_is_read_as_utc() {
        assert_eq!(parse_timestamp("2023-05-26T08:00:00").unwrap(), at(8, 0, 0));
        assert_eq!(parse_timestamp("2023-05-26 08:15:30").unwrap(), at(8, 15, 30));
        assert_eq!(
            parse_timestamp("2023-05-26T08:00:00.250").unwrap(),
            at(8, 0, 0) + Duration::milliseconds(250)
        );
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        for raw in ["", "yesterday", "2023-05-26", "2023-13-01T00:00:00"] {
            assert_matches!(parse_timestamp(raw), Err(CoreError::Validation(_)), "{raw}");
        }
    }

    #[test]
    fn window_is_half_open() {
        let window = TimeWindow::from_duration(at(10, 0, 0), 30).unwrap();
        assert!(window.contains(at(10, 0, 0)));
        assert!(window.contains(at(10, 29, 59)));
        assert!(!window.contains(at(10, 30, 0)));
        assert!(!window.contains(at(9, 59, 59)));
    }

    #[test]
    fn zero_duration_window_is_empty() {
        let window = TimeWindow::from_duration(at(10, 0, 0), 0).unwrap();
        assert!(window.is_empty());
        assert!(!window.contains(at(10, 0, 0)));
        assert_eq!(window.minute_slots(), 0);
    }

    #[test]
    fn negative_duration_is_rejected() {
        assert_matches!(
            TimeWindow::from_duration(at(10, 0, 0), -5),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn huge_duration_is_rejected_not_panicking() {
        assert_matches!(
            TimeWindow::from_duration(at(10, 0, 0), i64::MAX),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn minute_slots_counts_partial_minute() {
        let window = TimeWindow {
            start: at(10, 0, 30),
            end: at(10, 2, 0),
        };
        assert_eq!(window.minute_slots(), 2);

        let window = TimeWindow {
            start: at(10, 0, 0),
            end: at(11, 0, 0),
        };
        assert_eq!(window.minute_slots(), 60);
    }

    #[test]
    fn inverted_window_has_no_slots() {
        let window = TimeWindow {
            start: at(11, 0, 0),
            end: at(10, 30, 0),
        };
        assert!(window.is_empty());
        assert_eq!(window.minute_slots(), 0);
    }
}
