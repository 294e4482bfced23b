// SPDX-License-Identifier: MIT

//! Workout-Tracker: did you work out today?
//!
//! This crate is the data-freshness and aggregation core behind the workout
//! status surfaces. It fetches workout records from an external health data
//! source, reconciles them with a durable cache shared across processes,
//! and computes the derived facts (today's status, consecutive-day streak,
//! weekly totals) every surface renders.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
