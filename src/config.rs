// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.

use crate::models::PromptStyle;
use chrono::Weekday;
use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the health data API (no trailing slash)
    pub api_base_url: String,
    /// Shared cache namespace directory, readable and writable by every
    /// process that renders workout status
    pub cache_dir: PathBuf,
    /// First day of the week for bucketing the 7-day window
    pub first_weekday: Weekday,
    /// Refresh cadence for the watch loop, in minutes
    pub refresh_interval_minutes: u32,
    /// Tone of the status prompt copy
    pub prompt_style: PromptStyle,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:9470".to_string(),
            cache_dir: env::temp_dir().join("workout-tracker-test"),
            first_weekday: Weekday::Mon,
            refresh_interval_minutes: 5,
            prompt_style: PromptStyle::Motivational,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("WORKOUT_API_URL")
            .map_err(|_| ConfigError::Missing("WORKOUT_API_URL"))?
            .trim_end_matches('/')
            .to_string();

        let cache_dir = env::var("WORKOUT_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_cache_dir());

        let first_weekday = match env::var("FIRST_WEEKDAY") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("FIRST_WEEKDAY", raw))?,
            Err(_) => Weekday::Mon,
        };

        let refresh_interval_minutes = env::var("REFRESH_INTERVAL_MINUTES")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        let prompt_style = match env::var("PROMPT_STYLE") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("PROMPT_STYLE", raw))?,
            Err(_) => PromptStyle::Motivational,
        };

        Ok(Self {
            api_base_url,
            cache_dir,
            first_weekday,
            refresh_interval_minutes,
            prompt_style,
        })
    }
}

/// Platform cache directory, falling back to the temp dir on stripped-down
/// systems without one.
fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("workout-tracker")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
