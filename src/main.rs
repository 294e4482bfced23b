// SPDX-License-Identifier: MIT

//! Workout-Tracker CLI
//!
//! Thin host around the aggregation core:
//! - `status` (default): one-shot "did I work out today?" check
//! - `week`: weekly streak and totals
//! - `watch`: periodic refresh loop on the configured cadence

use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    cache::Cache,
    config::Config,
    error::Result,
    models::{prompt, week::WeekSummary, Workout},
    services::{HealthApiGateway, WorkoutService, TODAY_CACHE_KEY},
    time_utils,
};

#[derive(Parser)]
#[command(name = "workout-tracker")]
#[command(about = "Did you work out today?")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// One-shot "did I work out today?" check (the default)
    Status,
    /// Weekly streak and totals
    Week,
    /// Refresh periodically on the configured cadence
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let config = Config::from_env()?;
    tracing::info!(
        api = %config.api_base_url,
        cache_dir = %config.cache_dir.display(),
        "Starting workout-tracker"
    );

    let gateway = Arc::new(HealthApiGateway::new(config.api_base_url.clone()));
    let cache = Cache::open(&config.cache_dir, TODAY_CACHE_KEY)?;
    let service = WorkoutService::new(gateway, cache);

    match cli.command.unwrap_or(Command::Status) {
        Command::Status => run_status(&service, &config).await,
        Command::Week => run_week(&service, &config).await,
        Command::Watch => run_watch(&service, &config).await,
    }

    Ok(())
}

/// One-shot status check.
async fn run_status(service: &WorkoutService, config: &Config) {
    let (did_workout, workouts) = service.fetch_today().await;

    if did_workout {
        println!("{}", prompt::random_completed_prompt(config.prompt_style));
        if let Some(last) = workouts.first() {
            println!(
                "{} — {}",
                last.kind.display_name(),
                format_duration(last.duration())
            );
        }
    } else {
        let nudge = prompt::random_workout_prompt(config.prompt_style);
        println!("{} {}", nudge.title, nudge.subtitle);
    }
}

/// Weekly streak and totals.
async fn run_week(service: &WorkoutService, config: &Config) {
    let now = chrono::Utc::now();
    let weekly = service.fetch_weekly_workouts_at(now).await;
    let summary = WeekSummary::compute(now, config.first_weekday, &weekly);

    print_week(&summary, &weekly);
}

/// Periodic refresh loop for always-resident surfaces.
async fn run_watch(service: &WorkoutService, config: &Config) {
    let cadence = std::time::Duration::from_secs(u64::from(config.refresh_interval_minutes) * 60);
    let mut ticks = tokio::time::interval(cadence);

    loop {
        ticks.tick().await;

        let now = chrono::Utc::now();
        // Snap the displayed instant down to the cadence boundary so the
        // rendered timestamp stays stable between refreshes.
        let shown_at = time_utils::floor_to_minutes(now, config.refresh_interval_minutes);

        let did_workout = service.refresh_today_at(now).await;
        let weekly = service.fetch_weekly_workouts_at(now).await;
        let summary = WeekSummary::compute(now, config.first_weekday, &weekly);

        tracing::info!(
            at = %time_utils::format_utc_rfc3339(shown_at),
            did_workout,
            streak = summary.streak,
            weekly_workouts = summary.total_workouts,
            "Refreshed workout status"
        );

        println!(
            "[{}] {} | streak {} | {} workout{} this week ({})",
            time_utils::format_utc_rfc3339(shown_at),
            if did_workout { "done" } else { "not yet" },
            summary.streak,
            summary.total_workouts,
            if summary.total_workouts == 1 { "" } else { "s" },
            format_duration(summary.total_duration),
        );
    }
}

/// Print the week as one line per day plus the totals footer.
fn print_week(summary: &WeekSummary, weekly: &[Workout]) {
    if summary.streak > 0 {
        println!("This Week — {}-day streak", summary.streak);
    } else {
        println!("This Week");
    }

    for day in summary.days {
        let marker = if workout_tracker::models::week::has_workout_on(day, weekly) {
            "x"
        } else {
            "-"
        };
        println!("  {} {}", marker, day.format("%a %b %-d"));
    }

    if summary.total_workouts > 0 {
        println!(
            "{} workout{} — {}",
            summary.total_workouts,
            if summary.total_workouts == 1 { "" } else { "s" },
            format_duration(summary.total_duration),
        );
    }
}

/// Format a duration as H:MM:SS.
fn format_duration(duration: chrono::Duration) -> String {
    let total_secs = duration.num_seconds().max(0);
    format!(
        "{}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
