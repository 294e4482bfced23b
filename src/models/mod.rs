// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod prompt;
pub mod week;
pub mod workout;

pub use prompt::{MotivationPrompt, PromptStyle};
pub use week::WeekSummary;
pub use workout::{ActivityKind, Workout};
