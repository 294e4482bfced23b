// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod gateway;
pub mod health_api;
pub mod workout;

pub use gateway::{GatewayError, WorkoutGateway};
pub use health_api::HealthApiGateway;
pub use workout::{WorkoutService, TODAY_CACHE_KEY};
