// SPDX-License-Identifier: MIT

//! Workout aggregation service.
//!
//! Handles the core workflow:
//! 1. Fetch today's workouts from the health data source
//! 2. On success, republish the freshest set and persist or clear the cache
//! 3. On failure, fall back to the cached snapshot if it is still from today
//! 4. Serve the weekly window for streak and summary aggregation
//!
//! The asymmetry between confirmed-empty and failed fetches is deliberate:
//! a confirmed empty answer is authoritative and clears the cache so a stale
//! positive can never mask it, while an inability to ask leaves the cache
//! untouched so it cannot erase a previously confirmed workout.

use crate::cache::Cache;
use crate::models::Workout;
use crate::services::gateway::WorkoutGateway;
use crate::time_utils::{same_day, start_of_day};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cache key for today's workout snapshot.
pub const TODAY_CACHE_KEY: &str = "today-workouts";

/// Aggregator over the health data gateway and the durable cache.
///
/// Holds the freshest known workout set for today. The set is guarded by a
/// mutex held across the gateway call, so concurrent `refresh_today` calls
/// serialize and each call is a full transition of the set, never a partial
/// merge; the latest completed refresh wins.
pub struct WorkoutService {
    gateway: Arc<dyn WorkoutGateway>,
    cache: Cache<Vec<Workout>>,
    workouts: Mutex<Vec<Workout>>,
}

impl WorkoutService {
    pub fn new(gateway: Arc<dyn WorkoutGateway>, cache: Cache<Vec<Workout>>) -> Self {
        Self {
            gateway,
            cache,
            workouts: Mutex::new(Vec::new()),
        }
    }

    /// Refresh today's workout set and report whether a workout happened.
    pub async fn refresh_today(&self) -> bool {
        self.refresh_today_at(Utc::now()).await
    }

    /// Refresh against an explicit reference instant.
    pub async fn refresh_today_at(&self, now: DateTime<Utc>) -> bool {
        let mut workouts = self.workouts.lock().await;
        let from = start_of_day(now);

        match self.gateway.fetch_workouts(from, now, None).await {
            Ok(fetched) if !fetched.is_empty() => {
                self.cache.save(&fetched);
                *workouts = fetched;
                true
            }
            Ok(_) => {
                // Confirmed empty is authoritative: today's state is
                // "no workout" and must not be masked by a cached positive.
                self.cache.clear();
                workouts.clear();
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "Workout fetch failed, falling back to cache");

                // Read-only fallback. A snapshot is only valid evidence of
                // "today" if its leading record started on today's calendar
                // day; anything older is rejected, never presented as
                // current.
                match self.cache.load() {
                    Some(cached)
                        if cached
                            .first()
                            .is_some_and(|w| same_day(w.started_at, now)) =>
                    {
                        *workouts = cached;
                        true
                    }
                    _ => {
                        workouts.clear();
                        false
                    }
                }
            }
        }
    }

    /// Fetch the trailing week of workouts, `[start of day 6 days ago, now)`.
    ///
    /// Feeds only the informational weekly aggregates, so there is no cache
    /// and no fallback: a failed fetch degrades to an empty week.
    pub async fn fetch_weekly_workouts(&self) -> Vec<Workout> {
        self.fetch_weekly_workouts_at(Utc::now()).await
    }

    /// Weekly fetch against an explicit reference instant.
    pub async fn fetch_weekly_workouts_at(&self, now: DateTime<Utc>) -> Vec<Workout> {
        let from = start_of_day(now - Duration::days(6));

        match self.gateway.fetch_workouts(from, now, None).await {
            Ok(fetched) => fetched,
            Err(err) => {
                tracing::warn!(error = %err, "Weekly workout fetch failed");
                Vec::new()
            }
        }
    }

    /// One-shot status check: refresh and return the answer together with
    /// the resulting workout set.
    pub async fn fetch_today(&self) -> (bool, Vec<Workout>) {
        self.fetch_today_at(Utc::now()).await
    }

    /// One-shot status check against an explicit reference instant.
    pub async fn fetch_today_at(&self, now: DateTime<Utc>) -> (bool, Vec<Workout>) {
        let did_workout = self.refresh_today_at(now).await;
        (did_workout, self.workouts().await)
    }

    /// Snapshot of the freshest known workout set, newest first.
    pub async fn workouts(&self) -> Vec<Workout> {
        self.workouts.lock().await.clone()
    }

    /// Most recent workout of the freshest known set, if any.
    pub async fn last_workout(&self) -> Option<Workout> {
        self.workouts.lock().await.first().cloned()
    }
}
