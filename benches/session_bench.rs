// ABOUTME: Criterion benchmarks for the session hot path
// ABOUTME: Measures advance rule, progress formula, and full playback over plans of varied size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

//! Criterion benchmarks for the workout session state machine.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftmate::session::{advance, progress_percent, Advance, SetPosition, WorkoutSession};
use liftmate_core::config::SessionConfig;
use liftmate_core::models::{ExercisePlan, WorkoutPlan};

fn plan(exercises: usize, sets: u32) -> WorkoutPlan {
    (0..exercises).fold(WorkoutPlan::new("Bench"), |plan, i| {
        plan.with_exercise(ExercisePlan::new(format!("Exercise {i}"), sets, 8))
    })
}

fn bench_advance_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for exercises in [4_usize, 12, 40] {
        let plan = plan(exercises, 5);
        group.throughput(Throughput::Elements(u64::from(plan.total_sets())));
        group.bench_with_input(
            BenchmarkId::from_parameter(exercises),
            &plan.exercises,
            |b, exercises| {
                b.iter(|| {
                    let mut position = SetPosition::default();
                    let mut progress = 0.0;
                    while let Advance::Next(next) = advance(position, black_box(exercises)) {
                        progress += progress_percent(next, exercises);
                        position = next;
                    }
                    black_box(progress)
                });
            },
        );
    }
    group.finish();
}

fn bench_session_playback(c: &mut Criterion) {
    let config = SessionConfig::default();
    let plan = plan(12, 5);

    c.bench_function("session_playback_12x5", |b| {
        b.iter(|| {
            let mut session = WorkoutSession::new(plan.clone(), &config, Utc::now());
            while !session.phase().is_complete() {
                session.complete_set();
                session.tick();
                session.skip_rest();
            }
            black_box(session.snapshot())
        });
    });
}

criterion_group!(benches, bench_advance_walk, bench_session_playback);
criterion_main!(benches);
