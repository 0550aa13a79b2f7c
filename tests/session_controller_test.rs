// ABOUTME: Tests for the async session controller, its rest timer, and store write-through
// ABOUTME: Runs on a paused tokio clock so countdown behaviour is deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use liftmate::session::{SessionController, SessionEvent, SessionPhase, SetPosition};
use liftmate::store::{FailurePoint, InMemoryWorkoutStore};
use liftmate_core::errors::{PersistenceOperation, SessionError, StoreError};
use liftmate_core::models::{ExercisePlan, MuscleGroup, WorkoutPlan};
use std::sync::Arc;
use std::time::Duration;
use tokio::task;
use tokio::time::sleep;
use uuid::Uuid;

async fn started(plan: WorkoutPlan) -> (Arc<InMemoryWorkoutStore>, SessionController<InMemoryWorkoutStore>) {
    let store = Arc::new(InMemoryWorkoutStore::new());
    let workout_id = plan.workout_id;
    store.insert_workout(plan);
    let controller = SessionController::start(Arc::clone(&store), workout_id, common::config())
        .await
        .unwrap();
    (store, controller)
}

async fn remaining_secs(controller: &SessionController<InMemoryWorkoutStore>) -> Option<u32> {
    match controller.snapshot().await.phase {
        SessionPhase::Resting { remaining_secs, .. } => Some(remaining_secs),
        _ => None,
    }
}

#[tokio::test(start_paused = true)]
async fn test_rest_countdown_expires_into_next_set() {
    let (_store, mut controller) = started(common::two_exercise_plan()).await;

    let event = controller.complete_set().await;
    assert!(matches!(event, SessionEvent::RestStarted { rest_secs: 60, .. }));
    assert!(controller.has_rest_timer());

    sleep(Duration::from_millis(10_500)).await;
    assert_eq!(remaining_secs(&controller).await, Some(50));

    sleep(Duration::from_secs(50)).await;
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.phase, SessionPhase::Active);
    assert_eq!(snapshot.position, SetPosition::new(0, 1));
    assert!(!controller.has_rest_timer());
}

#[tokio::test(start_paused = true)]
async fn test_rest_timer_reported_only_while_counting_down() {
    let (_store, mut controller) = started(common::two_exercise_plan()).await;
    assert!(!controller.has_rest_timer());

    controller.complete_set().await;
    sleep(Duration::from_millis(59_500)).await;
    assert!(controller.has_rest_timer());

    sleep(Duration::from_secs(1)).await;
    assert_eq!(controller.snapshot().await.phase, SessionPhase::Active);
    assert!(!controller.has_rest_timer());

    controller.complete_set().await;
    assert!(controller.has_rest_timer());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_published_snapshot_matches_state_after_rest_expiry() {
    let plan = WorkoutPlan::new("Fast rests")
        .with_exercise(ExercisePlan::new("Kettlebell Swing", 25, 15).with_rest(2));
    let store = Arc::new(InMemoryWorkoutStore::new());
    let workout_id = plan.workout_id;
    store.insert_workout(plan);
    let config = common::config().with_tick_interval(Duration::from_millis(1));
    let mut controller = SessionController::start(Arc::clone(&store), workout_id, config)
        .await
        .unwrap();
    let published = controller.subscribe();

    for round in 0..20_u32 {
        let event = controller.complete_set().await;
        assert!(matches!(event, SessionEvent::RestStarted { .. }), "{event:?}");

        // The first edit to land is the first one after the rest expired
        let weight = f64::from(round);
        loop {
            let event = controller.edit_weight(Some(weight)).await.unwrap();
            if matches!(event, SessionEvent::WeightEdited { .. }) {
                break;
            }
            task::yield_now().await;
        }

        let latest = published.borrow().clone();
        assert_eq!(latest.weight, Some(weight), "round {round}");
        assert_eq!(latest, controller.snapshot().await, "round {round}");
    }
}

#[tokio::test(start_paused = true)]
async fn test_pause_freezes_countdown() {
    let (_store, mut controller) = started(common::two_exercise_plan()).await;
    controller.complete_set().await;

    sleep(Duration::from_millis(10_500)).await;
    let event = controller.toggle_pause().await;
    assert_eq!(
        event,
        SessionEvent::PauseToggled {
            paused: true,
            remaining_secs: 50
        }
    );

    sleep(Duration::from_secs(100)).await;
    assert_eq!(remaining_secs(&controller).await, Some(50));

    controller.toggle_pause().await;
    sleep(Duration::from_millis(49_250)).await;
    assert_eq!(remaining_secs(&controller).await, Some(1));

    sleep(Duration::from_secs(1)).await;
    assert_eq!(controller.snapshot().await.phase, SessionPhase::Active);
}

#[tokio::test(start_paused = true)]
async fn test_skipped_rest_timer_does_not_tick_next_rest() {
    let (_store, mut controller) = started(common::two_exercise_plan()).await;
    controller.complete_set().await;
    sleep(Duration::from_millis(5_500)).await;

    let event = controller.skip_rest().await;
    assert_eq!(
        event,
        SessionEvent::Advanced {
            from: SetPosition::new(0, 0),
            to: SetPosition::new(0, 1)
        }
    );
    assert!(!controller.has_rest_timer());

    controller.complete_set().await;
    sleep(Duration::from_millis(3_250)).await;
    assert_eq!(remaining_secs(&controller).await, Some(57));
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_timer_driven_updates() {
    let (_store, mut controller) = started(common::two_exercise_plan()).await;
    let mut updates = controller.subscribe();

    controller.complete_set().await;
    updates.borrow_and_update();

    sleep(Duration::from_millis(1_500)).await;
    assert!(updates.has_changed().unwrap());
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(
        snapshot.phase,
        SessionPhase::Resting {
            remaining_secs: 59,
            paused: false
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_ignored_complete_set_keeps_running_timer() {
    let (_store, mut controller) = started(common::two_exercise_plan()).await;
    controller.complete_set().await;

    assert!(controller.complete_set().await.is_ignored());
    assert!(controller.has_rest_timer());

    sleep(Duration::from_millis(2_500)).await;
    assert_eq!(remaining_secs(&controller).await, Some(58));
}

#[tokio::test]
async fn test_weight_edit_writes_through() {
    let (store, controller) = started(common::two_exercise_plan()).await;
    let exercise_id = controller.exercises().await[0].id;

    controller.edit_weight(Some(42.5)).await.unwrap();

    assert_eq!(store.exercise_weight(exercise_id), Some(Some(42.5)));
    assert_eq!(controller.exercises().await[0].weight, Some(42.5));
}

#[tokio::test]
async fn test_failed_write_through_keeps_in_memory_edit() {
    let (store, controller) = started(common::two_exercise_plan()).await;
    let exercise_id = controller.exercises().await[0].id;
    store.set_failure(FailurePoint::WeightUpdate, true);

    let result = controller.edit_weight(Some(42.5)).await;

    match result {
        Err(e @ SessionError::Persistence { .. }) => {
            assert!(e.is_recoverable());
            assert!(matches!(
                e,
                SessionError::Persistence {
                    operation: PersistenceOperation::WeightUpdate,
                    ..
                }
            ));
        }
        other => panic!("expected persistence error, got {other:?}"),
    }
    assert_eq!(controller.exercises().await[0].weight, Some(42.5));
    assert_eq!(controller.snapshot().await.weight, Some(42.5));
    assert_eq!(store.exercise_weight(exercise_id), Some(Some(60.0)));
}

#[tokio::test]
async fn test_start_fails_for_unknown_workout() {
    let store = Arc::new(InMemoryWorkoutStore::new());
    let missing = Uuid::new_v4();

    let result = SessionController::start(store, missing, common::config()).await;

    match result {
        Err(SessionError::Load {
            workout_id,
            source: StoreError::NotFound { .. },
        }) => assert_eq!(workout_id, missing),
        Err(other) => panic!("unexpected error {other:?}"),
        Ok(_) => panic!("session must not start"),
    }
}

#[tokio::test]
async fn test_start_fails_when_store_unavailable() {
    let store = Arc::new(InMemoryWorkoutStore::new());
    let plan = common::two_exercise_plan();
    let workout_id = plan.workout_id;
    store.insert_workout(plan);
    store.set_failure(FailurePoint::Load, true);

    let result = SessionController::start(store, workout_id, common::config()).await;
    assert!(matches!(
        result,
        Err(SessionError::Load {
            source: StoreError::Unavailable { .. },
            ..
        })
    ));
}

#[tokio::test]
async fn test_finalize_records_completion_and_muscle_log() {
    let (store, mut controller) = started(common::two_exercise_plan()).await;

    assert_eq!(controller.finalize().await.unwrap(), None);

    for _ in 0..3 {
        controller.complete_set().await;
        controller.skip_rest().await;
    }
    assert_eq!(controller.snapshot().await.phase, SessionPhase::Complete);
    controller.set_notes("Good pump").await;

    let record = controller.finalize().await.unwrap().unwrap();
    assert_eq!(record.notes, "Good pump");
    assert_eq!(record.elapsed_minutes, 0);

    let again = controller.finalize().await.unwrap().unwrap();
    assert_eq!(again, record);
    assert_eq!(store.completions().await, vec![record]);

    let log = store.muscle_log().await;
    let totals: Vec<(MuscleGroup, u32)> = log
        .iter()
        .map(|entry| (entry.muscle_group, entry.sets))
        .collect();
    assert_eq!(
        totals,
        vec![
            (MuscleGroup::Chest, 2),
            (MuscleGroup::Back, 1),
            (MuscleGroup::Biceps, 1),
            (MuscleGroup::Triceps, 2),
        ]
    );
}

#[tokio::test]
async fn test_finalize_failure_can_be_retried() {
    let (store, mut controller) = started(common::plan_with_sets(&[1])).await;
    controller.complete_set().await;
    controller.skip_rest().await;

    store.set_failure(FailurePoint::Completion, true);
    let result = controller.finalize().await;
    assert!(matches!(
        result,
        Err(SessionError::Persistence {
            operation: PersistenceOperation::Completion,
            ..
        })
    ));
    assert!(controller.completion().is_none());

    store.set_failure(FailurePoint::Completion, false);
    assert!(controller.finalize().await.unwrap().is_some());
    assert_eq!(store.completions().await.len(), 1);
}

#[tokio::test]
async fn test_muscle_log_failure_does_not_fail_finalize() {
    let (store, mut controller) = started(common::two_exercise_plan()).await;
    for _ in 0..3 {
        controller.complete_set().await;
        controller.skip_rest().await;
    }
    store.set_failure(FailurePoint::MuscleLog, true);

    assert!(controller.finalize().await.unwrap().is_some());
    assert_eq!(store.completions().await.len(), 1);
    assert!(store.muscle_log().await.is_empty());
}

#[tokio::test]
async fn test_empty_workout_finalizes_immediately() {
    let (store, mut controller) = started(WorkoutPlan::new("Rest day")).await;

    let snapshot = controller.snapshot().await;
    assert!(snapshot.is_empty);
    assert_eq!(snapshot.phase, SessionPhase::Complete);

    assert!(controller.finalize().await.unwrap().is_some());
    assert!(store.muscle_log().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_timer_and_saves_nothing() {
    let (store, mut controller) = started(common::two_exercise_plan()).await;
    let mut updates = controller.subscribe();
    controller.complete_set().await;
    updates.borrow_and_update();

    controller.cancel();
    sleep(Duration::from_secs(5)).await;

    assert!(updates.has_changed().is_err() || !updates.has_changed().unwrap());
    assert!(store.completions().await.is_empty());
}
