// SPDX-License-Identifier: MIT

//! Workout record model shared by the cache, gateway, and aggregation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Kind of activity performed during a workout.
///
/// The set is open-ended: the health data source can report kinds this app
/// has never seen, and those must not break aggregation (counts and
/// durations are kind-agnostic). Unrecognized wire tags land in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Walking,
    Cycling,
    Hiking,
    StrengthTraining,
    CoreTraining,
    Yoga,
    Hiit,
    #[serde(other)]
    Other,
}

impl ActivityKind {
    /// Human-readable name for display surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "Walking",
            ActivityKind::Cycling => "Cycling",
            ActivityKind::Hiking => "Hiking",
            ActivityKind::StrengthTraining => "Strength Training",
            ActivityKind::CoreTraining => "Core Training",
            ActivityKind::Yoga => "Yoga",
            ActivityKind::Hiit => "HIIT",
            ActivityKind::Other => "Workout",
        }
    }
}

impl Default for ActivityKind {
    fn default() -> Self {
        ActivityKind::Other
    }
}

/// One completed workout from the health data source.
///
/// Immutable once constructed; the freshest known set is replaced wholesale
/// on each refresh, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// When the workout started
    pub started_at: DateTime<Utc>,
    /// When the workout ended (`ended_at >= started_at`)
    pub ended_at: DateTime<Utc>,
    /// Kind of activity
    #[serde(default)]
    pub kind: ActivityKind,
}

impl Workout {
    /// Elapsed workout time. Clamped to zero if the source ever reports an
    /// end before the start.
    pub fn duration(&self) -> Duration {
        (self.ended_at - self.started_at).max(Duration::zero())
    }
}
