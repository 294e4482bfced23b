// SPDX-License-Identifier: MIT

//! Shared helpers for day and instant math.
//!
//! All calendar computation in this crate happens in UTC so that day
//! bucketing is deterministic no matter which process evaluates it.

use chrono::{DateTime, SecondsFormat, TimeZone, Timelike, Utc};

/// Start of the calendar day containing `instant`.
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(
        &instant
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .unwrap_or_default(),
    )
}

/// Whether two instants fall on the same UTC calendar day.
pub fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Floor an instant to the previous `minutes` boundary within its hour,
/// zeroing seconds and sub-seconds. Used to keep displayed refresh instants
/// stable across a polling cadence.
pub fn floor_to_minutes(instant: DateTime<Utc>, minutes: u32) -> DateTime<Utc> {
    if minutes == 0 {
        return instant;
    }
    let floored_minute = (instant.minute() / minutes) * minutes;
    instant
        .with_minute(floored_minute)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_day() {
        let instant = Utc.with_ymd_and_hms(2026, 2, 27, 17, 42, 9).unwrap();
        assert_eq!(
            start_of_day(instant),
            Utc.with_ymd_and_hms(2026, 2, 27, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_same_day_boundaries() {
        let just_before = Utc.with_ymd_and_hms(2026, 2, 27, 23, 59, 59).unwrap();
        let just_after = Utc.with_ymd_and_hms(2026, 2, 28, 0, 0, 0).unwrap();

        assert!(same_day(just_before, start_of_day(just_before)));
        assert!(!same_day(just_before, just_after));
    }

    #[test]
    fn test_floor_to_five_minutes() {
        let instant = Utc.with_ymd_and_hms(2026, 2, 27, 10, 17, 42).unwrap();
        assert_eq!(
            floor_to_minutes(instant, 5),
            Utc.with_ymd_and_hms(2026, 2, 27, 10, 15, 0).unwrap()
        );

        // Already on a boundary: only seconds are stripped.
        let on_boundary = Utc.with_ymd_and_hms(2026, 2, 27, 10, 20, 30).unwrap();
        assert_eq!(
            floor_to_minutes(on_boundary, 5),
            Utc.with_ymd_and_hms(2026, 2, 27, 10, 20, 0).unwrap()
        );
    }

    #[test]
    fn test_format_utc_rfc3339() {
        let instant = Utc.with_ymd_and_hms(2026, 2, 27, 8, 0, 0).unwrap();
        assert_eq!(format_utc_rfc3339(instant), "2026-02-27T08:00:00Z");
    }
}
