// ABOUTME: Tests for the pure advance rule and progress formula
// ABOUTME: Covers totality, ordering, exhaustion, and progress bounds over varied plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use liftmate::session::{advance, progress_percent, Advance, SetPosition};
use liftmate_core::models::ExercisePlan;

fn exercises(sets: &[u32]) -> Vec<ExercisePlan> {
    common::plan_with_sets(sets).exercises
}

/// Every position reachable from the start, in playback order
fn walk(exercises: &[ExercisePlan]) -> Vec<SetPosition> {
    let mut positions = vec![SetPosition::default()];
    let mut current = SetPosition::default();
    while let Advance::Next(next) = advance(current, exercises) {
        positions.push(next);
        current = next;
    }
    positions
}

#[test]
fn test_advance_moves_through_sets_then_exercises() {
    let plan = exercises(&[2, 1]);
    assert_eq!(
        advance(SetPosition::new(0, 0), &plan),
        Advance::Next(SetPosition::new(0, 1))
    );
    assert_eq!(
        advance(SetPosition::new(0, 1), &plan),
        Advance::Next(SetPosition::new(1, 0))
    );
    assert_eq!(advance(SetPosition::new(1, 0), &plan), Advance::Exhausted);
}

#[test]
fn test_advance_is_total_and_strictly_increasing() {
    let shapes: [&[u32]; 5] = [&[1], &[3], &[1, 1, 1], &[4, 2, 5], &[2, 0, 3]];
    for shape in shapes {
        let plan = exercises(shape);
        for exercise_index in 0..plan.len() {
            for set_index in 0..plan[exercise_index].effective_sets() as usize {
                let position = SetPosition::new(exercise_index, set_index);
                match advance(position, &plan) {
                    Advance::Next(next) => {
                        assert!(next > position, "{next} not after {position}");
                        assert!(next.is_valid_for(&plan), "{next} out of range");
                    }
                    Advance::Exhausted => {
                        assert_eq!(exercise_index, plan.len() - 1);
                    }
                }
            }
        }
    }
}

#[test]
fn test_walk_visits_every_set_once() {
    let plan = exercises(&[4, 2, 5]);
    let positions = walk(&plan);
    assert_eq!(positions.len(), 11);
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_zero_set_exercise_still_gets_one_set() {
    let plan = exercises(&[0, 2]);
    assert_eq!(
        advance(SetPosition::new(0, 0), &plan),
        Advance::Next(SetPosition::new(1, 0))
    );
}

#[test]
fn test_out_of_range_positions_report_exhaustion() {
    let plan = exercises(&[2]);
    assert_eq!(advance(SetPosition::new(5, 0), &plan), Advance::Exhausted);
    assert_eq!(advance(SetPosition::new(0, 9), &plan), Advance::Exhausted);
    assert_eq!(advance(SetPosition::default(), &[]), Advance::Exhausted);
}

#[test]
fn test_progress_stays_within_bounds_and_below_complete() {
    let plan = exercises(&[4, 2, 5]);
    let mut previous = -1.0;
    for position in walk(&plan) {
        let value = progress_percent(position, &plan);
        assert!((0.0..100.0).contains(&value), "{value} at {position}");
        assert!(value > previous);
        previous = value;
    }
}

#[test]
fn test_progress_keeps_uniform_exercise_weighting() {
    // Three exercises: the first two count as a third each regardless of set count
    let plan = exercises(&[10, 1, 2]);
    let at_third = progress_percent(SetPosition::new(2, 1), &plan);
    let expected = 2.0 / 3.0 * 100.0 + 0.5 * (100.0 / 3.0);
    assert!((at_third - expected).abs() < 1e-9);
}
