//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp from calendar fields, or `None` if they do not
    /// name a valid UTC instant.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp shifted by `minutes` (negative moves back).
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        Self(self.0 + Duration::minutes(minutes))
    }

    /// Creates a new timestamp shifted by `hours` (negative moves back).
    pub fn plus_hours(&self, hours: i64) -> Self {
        Self(self.0 + Duration::hours(hours))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn noon() -> Timestamp {
        Timestamp::from_ymd_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn from_ymd_hms_builds_expected_instant() {
        let ts = noon();
        assert_eq!(ts.as_datetime().year(), 2025);
        assert_eq!(ts.as_datetime().hour(), 12);
    }

    #[test]
    fn from_ymd_hms_rejects_impossible_date() {
        assert!(Timestamp::from_ymd_hms(2025, 2, 30, 0, 0, 0).is_none());
    }

    #[test]
    fn plus_hours_and_minutes_shift_forward_and_back() {
        let ts = noon();
        assert_eq!(ts.plus_hours(2).as_datetime().hour(), 14);
        assert_eq!(ts.plus_hours(-1).as_datetime().hour(), 11);
        assert_eq!(ts.plus_minutes(30).as_datetime().minute(), 30);
    }

    #[test]
    fn ordering_and_comparisons_agree() {
        let earlier = noon();
        let later = earlier.plus_minutes(1);

        assert!(earlier < later);
        assert_eq!(later.duration_since(&earlier), Duration::minutes(1));
    }

    #[test]
    fn converts_from_chrono_datetime() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(Timestamp::from(dt), noon());
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let json = "\"2025-01-01T12:00:00Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();
        assert_eq!(ts, noon());
    }
}
