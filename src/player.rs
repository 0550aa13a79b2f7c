// ABOUTME: Page-flip cursor over a workout's exercises for manual browsing and editing
// ABOUTME: Independent of the guided session; no timer and no set tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use liftmate_core::models::ExercisePlan;

/// Cursor over an exercise list, clamped at both ends
#[derive(Debug, Clone)]
pub struct ExercisePager {
    exercises: Vec<ExercisePlan>,
    index: usize,
}

impl ExercisePager {
    /// Start on the first exercise
    #[must_use]
    pub const fn new(exercises: Vec<ExercisePlan>) -> Self {
        Self {
            exercises,
            index: 0,
        }
    }

    /// Exercise on the current page; `None` for an empty list
    #[must_use]
    pub fn current(&self) -> Option<&ExercisePlan> {
        self.exercises.get(self.index)
    }

    /// Mutable access to the current exercise for editing
    pub fn current_mut(&mut self) -> Option<&mut ExercisePlan> {
        self.exercises.get_mut(self.index)
    }

    /// Current page index
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of pages
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// No pages at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// On the first page (true for an empty list)
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.index == 0
    }

    /// On the last page (true for an empty list)
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.exercises.len()
    }

    /// Move forward one page; returns whether the page changed
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move back one page; returns whether the page changed
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jump to `index`, clamped to the last page; returns the page landed on
    pub fn go_to(&mut self, index: usize) -> usize {
        self.index = index.min(self.exercises.len().saturating_sub(1));
        self.index
    }

    /// Give the (possibly edited) exercises back
    #[must_use]
    pub fn into_exercises(self) -> Vec<ExercisePlan> {
        self.exercises
    }
}
