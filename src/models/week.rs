// SPDX-License-Identifier: MIT

//! Time-window aggregation over a workout set.
//!
//! Pure functions of `(workouts, reference instant, week-start convention)`.
//! Nothing here is persisted; every surface recomputes these facts from the
//! record set it holds, so the answers agree no matter who asks.
//!
//! Day comparison is by UTC calendar-day equality, never by raw elapsed
//! time, so a record from outside the current week (for example out of a
//! stale cache) is never miscounted into an adjacent week.

use crate::models::Workout;
use crate::time_utils::{same_day, start_of_day};
use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// The 7 day-start instants of the calendar week containing `reference`,
/// beginning at `week_start`.
pub fn week_days(reference: DateTime<Utc>, week_start: Weekday) -> [DateTime<Utc>; 7] {
    let today = start_of_day(reference);
    let days_back = (reference.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    let first = today - Duration::days(i64::from(days_back));

    std::array::from_fn(|offset| first + Duration::days(offset as i64))
}

/// Whether any workout started on the same calendar day as `day`.
pub fn has_workout_on(day: DateTime<Utc>, workouts: &[Workout]) -> bool {
    workouts.iter().any(|w| same_day(w.started_at, day))
}

/// Count of consecutive calendar days with a workout, walking backward from
/// the day of `reference`. Zero if `reference`'s own day has none.
pub fn streak(reference: DateTime<Utc>, workouts: &[Workout]) -> u32 {
    let mut count = 0;
    let mut day = start_of_day(reference);

    while has_workout_on(day, workouts) {
        count += 1;
        day -= Duration::days(1);
    }

    count
}

/// Number of workouts whose start falls on one of the 7 week days.
pub fn weekly_count(reference: DateTime<Utc>, week_start: Weekday, workouts: &[Workout]) -> usize {
    week_days(reference, week_start)
        .iter()
        .map(|day| {
            workouts
                .iter()
                .filter(|w| same_day(w.started_at, *day))
                .count()
        })
        .sum()
}

/// Total duration of all workouts whose start falls on one of the 7 week
/// days.
pub fn weekly_duration(
    reference: DateTime<Utc>,
    week_start: Weekday,
    workouts: &[Workout],
) -> Duration {
    week_days(reference, week_start)
        .iter()
        .flat_map(|day| {
            workouts
                .iter()
                .filter(|w| same_day(w.started_at, *day))
                .map(Workout::duration)
        })
        .fold(Duration::zero(), |total, d| total + d)
}

/// All weekly facts for one evaluation, bundled for callers that render
/// them together.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    /// Day-start instants of the current week, in order
    pub days: [DateTime<Utc>; 7],
    /// Consecutive-day streak ending at the reference day
    pub streak: u32,
    /// Workouts started within the week
    pub total_workouts: usize,
    /// Total duration of those workouts
    pub total_duration: Duration,
}

impl WeekSummary {
    pub fn compute(reference: DateTime<Utc>, week_start: Weekday, workouts: &[Workout]) -> Self {
        Self {
            days: week_days(reference, week_start),
            streak: streak(reference, workouts),
            total_workouts: weekly_count(reference, week_start, workouts),
            total_duration: weekly_duration(reference, week_start, workouts),
        }
    }
}
