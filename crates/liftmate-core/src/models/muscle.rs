// ABOUTME: Muscle group taxonomy and keyword classification of exercise names
// ABOUTME: Feeds the best-effort training log derived from completed sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Muscle groups tracked in the weekly training summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps, rhomboids
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps and brachialis
    Biceps,
    /// Triceps
    Triceps,
    /// Front of the thigh
    Quads,
    /// Back of the thigh
    Hamstrings,
    /// Gluteals
    Glutes,
    /// Gastrocnemius and soleus
    Calves,
    /// Abdominals and obliques
    Core,
}

/// Keyword table checked against lowercased exercise names.
/// Order matters only for readability; every matching row contributes.
const KEYWORDS: &[(&str, &[MuscleGroup])] = &[
    ("bench", &[MuscleGroup::Chest, MuscleGroup::Triceps]),
    ("chest", &[MuscleGroup::Chest]),
    ("fly", &[MuscleGroup::Chest]),
    ("push-up", &[MuscleGroup::Chest, MuscleGroup::Triceps]),
    ("push up", &[MuscleGroup::Chest, MuscleGroup::Triceps]),
    ("pushup", &[MuscleGroup::Chest, MuscleGroup::Triceps]),
    ("dip", &[MuscleGroup::Triceps, MuscleGroup::Chest]),
    ("pull-up", &[MuscleGroup::Back, MuscleGroup::Biceps]),
    ("pull up", &[MuscleGroup::Back, MuscleGroup::Biceps]),
    ("pullup", &[MuscleGroup::Back, MuscleGroup::Biceps]),
    ("chin-up", &[MuscleGroup::Back, MuscleGroup::Biceps]),
    ("chin up", &[MuscleGroup::Back, MuscleGroup::Biceps]),
    ("row", &[MuscleGroup::Back]),
    ("pulldown", &[MuscleGroup::Back]),
    ("deadlift", &[MuscleGroup::Back, MuscleGroup::Hamstrings, MuscleGroup::Glutes]),
    ("shrug", &[MuscleGroup::Back]),
    ("overhead press", &[MuscleGroup::Shoulders, MuscleGroup::Triceps]),
    ("shoulder", &[MuscleGroup::Shoulders]),
    ("lateral raise", &[MuscleGroup::Shoulders]),
    ("military", &[MuscleGroup::Shoulders]),
    ("curl", &[MuscleGroup::Biceps]),
    ("tricep", &[MuscleGroup::Triceps]),
    ("skull", &[MuscleGroup::Triceps]),
    ("pushdown", &[MuscleGroup::Triceps]),
    ("squat", &[MuscleGroup::Quads, MuscleGroup::Glutes]),
    ("lunge", &[MuscleGroup::Quads, MuscleGroup::Glutes]),
    ("leg press", &[MuscleGroup::Quads]),
    ("leg extension", &[MuscleGroup::Quads]),
    ("leg curl", &[MuscleGroup::Hamstrings]),
    ("romanian", &[MuscleGroup::Hamstrings, MuscleGroup::Glutes]),
    ("hip thrust", &[MuscleGroup::Glutes]),
    ("glute", &[MuscleGroup::Glutes]),
    ("calf", &[MuscleGroup::Calves]),
    ("plank", &[MuscleGroup::Core]),
    ("crunch", &[MuscleGroup::Core]),
    ("sit-up", &[MuscleGroup::Core]),
    ("situp", &[MuscleGroup::Core]),
    ("ab ", &[MuscleGroup::Core]),
    ("abs", &[MuscleGroup::Core]),
    ("russian twist", &[MuscleGroup::Core]),
];

impl MuscleGroup {
    /// All groups in display order
    pub const ALL: [Self; 10] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Quads,
        Self::Hamstrings,
        Self::Glutes,
        Self::Calves,
        Self::Core,
    ];

    /// Database string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Quads => "quads",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
            Self::Core => "core",
        }
    }

    /// Parse the database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.as_str() == s)
    }

    /// Muscle groups trained by an exercise, inferred from its name.
    ///
    /// Returns groups sorted and deduplicated; unknown names yield an empty list.
    #[must_use]
    pub fn classify(exercise_name: &str) -> Vec<Self> {
        // Trailing space lets "ab " match a final word without matching "cable"
        let name = format!("{} ", exercise_name.to_lowercase());
        let mut groups: Vec<Self> = KEYWORDS
            .iter()
            .filter(|(keyword, _)| name.contains(keyword))
            .flat_map(|(_, groups)| groups.iter().copied())
            .collect();
        groups.sort_unstable();
        groups.dedup();
        groups
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the muscle-group training log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleGroupEntry {
    /// Workout the sets came from
    pub workout_id: Uuid,
    /// Muscle group trained
    pub muscle_group: MuscleGroup,
    /// Number of sets that hit this group
    pub sets: u32,
    /// When the session was finalized
    pub logged_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_compound_lifts() {
        assert_eq!(
            MuscleGroup::classify("Barbell Bench Press"),
            vec![MuscleGroup::Chest, MuscleGroup::Triceps]
        );
        assert_eq!(
            MuscleGroup::classify("Conventional Deadlift"),
            vec![MuscleGroup::Back, MuscleGroup::Hamstrings, MuscleGroup::Glutes]
        );
    }

    #[test]
    fn test_classify_unknown_is_empty() {
        assert!(MuscleGroup::classify("Jumping Jacks").is_empty());
    }

    #[test]
    fn test_classify_ab_suffix_not_cable() {
        assert!(MuscleGroup::classify("Cable Crossover Fly")
            .iter()
            .all(|g| *g != MuscleGroup::Core));
        assert_eq!(MuscleGroup::classify("Hanging Ab"), vec![MuscleGroup::Core]);
    }

    #[test]
    fn test_parse_roundtrips_every_group() {
        for group in MuscleGroup::ALL {
            assert_eq!(MuscleGroup::parse(group.as_str()), Some(group));
        }
        assert_eq!(MuscleGroup::parse("forearms"), None);
    }
}
