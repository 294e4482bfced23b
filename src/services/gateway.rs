// SPDX-License-Identifier: MIT

//! Fetch boundary to the external health data source.
//!
//! The aggregator's fallback behavior depends on being able to tell
//! "confirmed zero workouts" apart from "could not ask", so the gateway
//! signals failure through a typed error instead of an empty result.

use crate::models::Workout;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Failure modes of the health data source.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Read permission was not granted, or was revoked.
    #[error("Health data access not authorized")]
    Unauthorized,

    /// The source exists but cannot answer right now (device locked,
    /// store unavailable).
    #[error("Health data source unavailable")]
    Unavailable,

    /// Transient I/O problem talking to the source.
    #[error("Health data request failed: {0}")]
    Transient(String),
}

/// Query interface to the workout store.
///
/// One bounded asynchronous call per invocation, no internal retry; retry
/// policy belongs to the caller. Results are sorted newest-first.
#[async_trait]
pub trait WorkoutGateway: Send + Sync {
    /// Fetch workouts whose start falls in `[from, to)`, newest first.
    /// `limit` caps the result count when the caller only needs the head.
    async fn fetch_workouts(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: Option<u32>,
    ) -> Result<Vec<Workout>, GatewayError>;
}
