// SPDX-License-Identifier: MIT

//! Application error types.
//!
//! Data-source problems are handled inside the aggregator (fallback to the
//! cache) and never reach this type; what remains are the startup-time
//! configuration defects the core should not try to recover from.

use crate::cache::CacheError;
use crate::config::ConfigError;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

/// Result type alias for application entry points
pub type Result<T> = std::result::Result<T, AppError>;
