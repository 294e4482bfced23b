// SPDX-License-Identifier: MIT

//! HTTP-backed workout gateway.
//!
//! Talks to a local health data daemon exposing workouts over REST:
//! `GET {base}/v1/workouts?from=...&to=...&limit=...` returning a JSON
//! array of workout records, newest first.

use crate::models::Workout;
use crate::services::gateway::{GatewayError, WorkoutGateway};
use crate::time_utils::format_utc_rfc3339;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Health data API client.
#[derive(Clone)]
pub struct HealthApiGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HealthApiGateway {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Check response status, mapping the source's failure modes.
    async fn check_response_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            // Permission not granted or revoked
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(GatewayError::Unauthorized);
            }

            // Store locked or not ready to answer
            if status.as_u16() == 423 || status.as_u16() == 503 {
                return Err(GatewayError::Unavailable);
            }

            return Err(GatewayError::Transient(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::Transient(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl WorkoutGateway for HealthApiGateway {
    async fn fetch_workouts(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: Option<u32>,
    ) -> Result<Vec<Workout>, GatewayError> {
        let url = format!("{}/v1/workouts", self.base_url);

        let mut query = vec![
            ("from", format_utc_rfc3339(from)),
            ("to", format_utc_rfc3339(to)),
        ];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| GatewayError::Transient(e.to_string()))?;

        self.check_response_json(response).await
    }
}
