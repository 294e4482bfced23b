use chrono::{Duration, TimeZone, Utc, Weekday};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use workout_tracker::models::week::WeekSummary;
use workout_tracker::models::{ActivityKind, Workout};

fn benchmark_week_summary(c: &mut Criterion) {
    let reference = Utc.with_ymd_and_hms(2026, 2, 27, 15, 0, 0).unwrap();

    // A realistic week: two workouts a day across the trailing window.
    let busy_week: Vec<Workout> = (0..14)
        .map(|i| {
            let started_at = reference - Duration::hours(12 * i);
            Workout {
                started_at,
                ended_at: started_at + Duration::minutes(45),
                kind: ActivityKind::Running,
            }
        })
        .collect();

    // A pathological set: a year of records, mostly outside the window.
    let year_of_records: Vec<Workout> = (0..365)
        .map(|i| {
            let started_at = reference - Duration::days(i);
            Workout {
                started_at,
                ended_at: started_at + Duration::minutes(30),
                kind: ActivityKind::Cycling,
            }
        })
        .collect();

    let mut group = c.benchmark_group("week_summary");

    group.bench_function("busy_week", |b| {
        b.iter(|| WeekSummary::compute(black_box(reference), Weekday::Mon, black_box(&busy_week)))
    });

    group.bench_function("year_of_records", |b| {
        b.iter(|| {
            WeekSummary::compute(
                black_box(reference),
                Weekday::Mon,
                black_box(&year_of_records),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_week_summary);
criterion_main!(benches);
