//! Half-open time interval value object.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::BookingError;
use crate::domain::foundation::Timestamp;

/// Immutable `[start, end)` range of time.
///
/// # Invariants
///
/// - `start < end` (zero-length and inverted ranges are rejected)
///
/// The end instant is excluded, so an interval ending at 14:00 does not
/// overlap one starting at 14:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct TimeInterval {
    start: Timestamp,
    end: Timestamp,
}

impl TimeInterval {
    /// Creates an interval from `start` (inclusive) to `end` (exclusive).
    ///
    /// # Errors
    ///
    /// - `InvalidInterval` if `start >= end`
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, BookingError> {
        if start >= end {
            return Err(BookingError::InvalidInterval);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Length of the interval, always positive.
    pub fn duration(&self) -> Duration {
        self.end.duration_since(&self.start)
    }

    /// Returns true if the two intervals share at least one instant.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Deserialize)]
struct RawInterval {
    start: Timestamp,
    end: Timestamp,
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = BookingError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Base interval: [10:00, 12:00)
    fn base_time() -> Timestamp {
        Timestamp::from_ymd_hms(2025, 1, 1, 10, 0, 0).unwrap()
    }

    fn interval(start_offset_mins: i64, end_offset_mins: i64) -> TimeInterval {
        let base = base_time();
        TimeInterval::new(
            base.plus_minutes(start_offset_mins),
            base.plus_minutes(end_offset_mins),
        )
        .unwrap()
    }

    fn base_range() -> TimeInterval {
        interval(0, 120)
    }

    // Construction tests

    #[test]
    fn new_rejects_start_after_end() {
        let start = base_time();
        let result = TimeInterval::new(start, start.plus_hours(-1));
        assert_eq!(result, Err(BookingError::InvalidInterval));
    }

    #[test]
    fn new_rejects_zero_length() {
        let start = base_time();
        assert_eq!(
            TimeInterval::new(start, start),
            Err(BookingError::InvalidInterval)
        );
    }

    #[test]
    fn new_keeps_endpoints_and_duration() {
        let range = base_range();
        assert_eq!(range.start(), base_time());
        assert_eq!(range.end(), base_time().plus_hours(2));
        assert_eq!(range.duration(), Duration::hours(2));
    }

    #[test]
    fn equal_endpoints_give_equal_values() {
        assert_eq!(interval(0, 60), interval(0, 60));
        assert_ne!(interval(0, 60), interval(0, 61));
    }

    // Overlap tests

    #[test]
    fn overlaps_when_completely_inside() {
        let inner = interval(30, 60); // 10:30-11:00
        assert!(base_range().overlaps(&inner));
        assert!(inner.overlaps(&base_range()));
    }

    #[test]
    fn overlaps_when_starts_before_and_ends_inside() {
        assert!(base_range().overlaps(&interval(-60, 60))); // 09:00-11:00
    }

    #[test]
    fn overlaps_when_starts_inside_and_ends_after() {
        assert!(base_range().overlaps(&interval(60, 180))); // 11:00-13:00
    }

    #[test]
    fn overlaps_when_completely_wraps() {
        assert!(base_range().overlaps(&interval(-60, 180))); // 09:00-13:00
    }

    #[test]
    fn does_not_overlap_when_completely_before() {
        assert!(!base_range().overlaps(&interval(-120, -60))); // 08:00-09:00
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let next = interval(120, 180); // 12:00-13:00
        assert!(!base_range().overlaps(&next));
        assert!(!next.overlaps(&base_range()));
    }

    // Serde

    #[test]
    fn deserialization_rejects_inverted_interval() {
        let json = r#"{"start":"2025-01-01T12:00:00Z","end":"2025-01-01T10:00:00Z"}"#;
        assert!(serde_json::from_str::<TimeInterval>(json).is_err());
    }

    #[test]
    fn deserialization_accepts_valid_interval() {
        let json = r#"{"start":"2025-01-01T10:00:00Z","end":"2025-01-01T12:00:00Z"}"#;
        let parsed: TimeInterval = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, base_range());
    }

    proptest! {
        #[test]
        fn construction_succeeds_iff_start_precedes_end(
            a in -10_000i64..10_000,
            b in -10_000i64..10_000,
        ) {
            let base = base_time();
            let result = TimeInterval::new(base.plus_minutes(a), base.plus_minutes(b));
            if a < b {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(BookingError::InvalidInterval));
            }
        }

        #[test]
        fn overlap_is_symmetric(
            a in -1_000i64..1_000, len_a in 1i64..500,
            b in -1_000i64..1_000, len_b in 1i64..500,
        ) {
            let first = interval(a, a + len_a);
            let second = interval(b, b + len_b);
            prop_assert_eq!(first.overlaps(&second), second.overlaps(&first));
        }

        #[test]
        fn back_to_back_intervals_never_overlap(
            a in -1_000i64..1_000,
            len_a in 1i64..500,
            len_b in 1i64..500,
        ) {
            let first = interval(a, a + len_a);
            let second = interval(a + len_a, a + len_a + len_b);
            prop_assert!(!first.overlaps(&second));
        }
    }
}
