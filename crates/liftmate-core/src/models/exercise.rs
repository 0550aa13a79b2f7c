// ABOUTME: Workout and exercise plan models loaded from the backing store
// ABOUTME: Includes weight validation and effective rest resolution helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One exercise in a workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePlan {
    /// Backing record identifier, target of weight write-through
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Display name, also used for muscle group and media lookups
    pub name: String,
    /// Number of sets (at least 1)
    pub sets: u32,
    /// Target repetitions per set (at least 1)
    pub reps: u32,
    /// Working weight; `None` for bodyweight or unset
    #[serde(default)]
    pub weight: Option<f64>,
    /// Rest after each set; falls back to the workout default when absent
    #[serde(default)]
    pub rest_time_secs: Option<u32>,
    /// Instructional text
    #[serde(default)]
    pub notes: Option<String>,
}

impl ExercisePlan {
    /// Create an exercise with no weight, rest override, or notes
    #[must_use]
    pub fn new(name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sets,
            reps,
            weight: None,
            rest_time_secs: None,
            notes: None,
        }
    }

    /// Set the working weight
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Override the rest between sets
    #[must_use]
    pub const fn with_rest(mut self, rest_time_secs: u32) -> Self {
        self.rest_time_secs = Some(rest_time_secs);
        self
    }

    /// Attach instructional notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set count used for sequencing. Stored plans with zero sets still get one.
    #[must_use]
    pub fn effective_sets(&self) -> u32 {
        self.sets.max(1)
    }
}

/// A workout as returned by the store: ordered exercises plus the default rest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Workout identifier
    #[serde(default = "Uuid::new_v4")]
    pub workout_id: Uuid,
    /// Workout name
    pub name: String,
    /// Rest used for exercises without their own rest time
    #[serde(default)]
    pub default_rest_secs: Option<u32>,
    /// Exercises in playback order
    #[serde(default)]
    pub exercises: Vec<ExercisePlan>,
}

impl WorkoutPlan {
    /// Create an empty workout plan
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            workout_id: Uuid::new_v4(),
            name: name.into(),
            default_rest_secs: None,
            exercises: Vec::new(),
        }
    }

    /// Set the workout-level default rest
    #[must_use]
    pub const fn with_default_rest(mut self, secs: u32) -> Self {
        self.default_rest_secs = Some(secs);
        self
    }

    /// Append an exercise
    #[must_use]
    pub fn with_exercise(mut self, exercise: ExercisePlan) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Total number of sets across all exercises
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(ExercisePlan::effective_sets).sum()
    }
}

/// Weights must be finite and non-negative; `None` clears the weight
#[must_use]
pub fn is_valid_weight(weight: Option<f64>) -> bool {
    weight.map_or(true, |w| w.is_finite() && w >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_validation() {
        assert!(is_valid_weight(None));
        assert!(is_valid_weight(Some(0.0)));
        assert!(is_valid_weight(Some(42.5)));
        assert!(!is_valid_weight(Some(-1.0)));
        assert!(!is_valid_weight(Some(f64::NAN)));
        assert!(!is_valid_weight(Some(f64::INFINITY)));
    }

    #[test]
    fn test_plan_deserializes_with_defaults() {
        let json = r#"{
            "name": "Push Day",
            "default_rest_secs": 90,
            "exercises": [{"name": "Bench Press", "sets": 3, "reps": 8}]
        }"#;
        let plan: WorkoutPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.default_rest_secs, Some(90));
        assert_eq!(plan.exercises.len(), 1);
        assert_eq!(plan.exercises[0].weight, None);
        assert_eq!(plan.total_sets(), 3);
    }

    #[test]
    fn test_zero_sets_sequenced_as_one() {
        let exercise = ExercisePlan::new("Plank", 0, 1);
        assert_eq!(exercise.effective_sets(), 1);
    }
}
