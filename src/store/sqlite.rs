// ABOUTME: SQLite workout store on an sqlx connection pool
// ABOUTME: Creates its tables on connect and maps rows into workout and completion models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use super::WorkoutStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use liftmate_core::constants::database::DEFAULT_MAX_CONNECTIONS;
use liftmate_core::errors::StoreError;
use liftmate_core::models::{
    CompletionRecord, ExercisePlan, MuscleGroup, MuscleGroupEntry, WorkoutPlan,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Decode, Error as SqlxError, Row, Sqlite, SqlitePool, Type};
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

/// Table definitions, applied in order by [`SqliteWorkoutStore::migrate`]
const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS workouts (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        default_rest_secs INTEGER
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS exercises (
        id TEXT PRIMARY KEY,
        workout_id TEXT NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        name TEXT NOT NULL,
        sets INTEGER NOT NULL,
        reps INTEGER NOT NULL,
        weight REAL,
        rest_time_secs INTEGER,
        notes TEXT
    )
    ",
    r"
    CREATE INDEX IF NOT EXISTS idx_exercises_workout_position
        ON exercises(workout_id, position)
    ",
    r"
    CREATE TABLE IF NOT EXISTS workout_completions (
        id TEXT PRIMARY KEY,
        workout_id TEXT NOT NULL,
        elapsed_minutes INTEGER NOT NULL,
        notes TEXT NOT NULL,
        completed_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS muscle_group_log (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        workout_id TEXT NOT NULL,
        muscle_group TEXT NOT NULL,
        sets INTEGER NOT NULL,
        logged_at TEXT NOT NULL
    )
    ",
];

/// Workout store persisted in `SQLite`
#[derive(Debug, Clone)]
pub struct SqliteWorkoutStore {
    pool: SqlitePool,
}

impl SqliteWorkoutStore {
    /// Open (creating if needed) the database at `database_url` and apply the schema.
    ///
    /// In-memory databases use a single pinned connection so every query sees
    /// the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or the
    /// schema cannot be applied
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(query_error("parse database url"))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await
        } else {
            SqlitePoolOptions::new()
                .max_connections(DEFAULT_MAX_CONNECTIONS)
                .connect_with(options)
                .await
        }
        .map_err(|e| StoreError::unavailable(format!("failed to open {database_url}: {e}")))?;

        let store = Self { pool };
        store.migrate().await?;
        info!(database_url, "SQLite workout store ready");
        Ok(store)
    }

    /// Create missing tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(query_error("apply schema"))?;
        }
        Ok(())
    }

    /// Insert or replace a workout and all of its exercises
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; nothing is written in that case
    pub async fn insert_workout(&self, plan: &WorkoutPlan) -> Result<(), StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(query_error("begin transaction"))?;

        sqlx::query("DELETE FROM exercises WHERE workout_id = $1")
            .bind(plan.workout_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(query_error("clear exercises"))?;

        sqlx::query(
            r"
            INSERT INTO workouts (id, name, default_rest_secs)
            VALUES ($1, $2, $3)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                default_rest_secs = excluded.default_rest_secs
            ",
        )
        .bind(plan.workout_id.to_string())
        .bind(&plan.name)
        .bind(plan.default_rest_secs.map(i64::from))
        .execute(&mut *tx)
        .await
        .map_err(query_error("insert workout"))?;

        for (position, exercise) in plan.exercises.iter().enumerate() {
            sqlx::query(
                r"
                INSERT INTO exercises
                    (id, workout_id, position, name, sets, reps, weight, rest_time_secs, notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ",
            )
            .bind(exercise.id.to_string())
            .bind(plan.workout_id.to_string())
            .bind(position as i64)
            .bind(&exercise.name)
            .bind(i64::from(exercise.sets))
            .bind(i64::from(exercise.reps))
            .bind(exercise.weight)
            .bind(exercise.rest_time_secs.map(i64::from))
            .bind(exercise.notes.as_deref())
            .execute(&mut *tx)
            .await
            .map_err(query_error("insert exercise"))?;
        }

        tx.commit().await.map_err(query_error("commit workout"))?;
        debug!(
            workout_id = %plan.workout_id,
            exercises = plan.exercises.len(),
            "Stored workout plan"
        );
        Ok(())
    }

    /// Completion records for a workout, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn completions_for(
        &self,
        workout_id: Uuid,
    ) -> Result<Vec<CompletionRecord>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT id, workout_id, elapsed_minutes, notes, completed_at
            FROM workout_completions
            WHERE workout_id = $1
            ORDER BY completed_at ASC
            ",
        )
        .bind(workout_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_error("list completions"))?;

        rows.iter().map(row_to_completion).collect()
    }

    /// Muscle-group log entries for a workout
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn muscle_log_for(
        &self,
        workout_id: Uuid,
    ) -> Result<Vec<MuscleGroupEntry>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT workout_id, muscle_group, sets, logged_at
            FROM muscle_group_log
            WHERE workout_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(workout_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_error("list muscle log"))?;

        rows.iter().map(row_to_muscle_entry).collect()
    }
}

#[async_trait]
impl WorkoutStore for SqliteWorkoutStore {
    async fn load_workout_plan(&self, workout_id: Uuid) -> Result<WorkoutPlan, StoreError> {
        let workout = sqlx::query("SELECT id, name, default_rest_secs FROM workouts WHERE id = $1")
            .bind(workout_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("load workout"))?
            .ok_or_else(|| StoreError::not_found("workout", workout_id))?;

        let rows = sqlx::query(
            r"
            SELECT id, name, sets, reps, weight, rest_time_secs, notes
            FROM exercises
            WHERE workout_id = $1
            ORDER BY position ASC
            ",
        )
        .bind(workout_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_error("load exercises"))?;

        let exercises = rows
            .iter()
            .map(row_to_exercise)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WorkoutPlan {
            workout_id,
            name: get_column(&workout, "workouts", "name")?,
            default_rest_secs: get_optional_u32(&workout, "workouts", "default_rest_secs")?,
            exercises,
        })
    }

    async fn update_exercise_weight(
        &self,
        exercise_id: Uuid,
        weight: Option<f64>,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE exercises SET weight = $1 WHERE id = $2")
            .bind(weight)
            .bind(exercise_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_error("update exercise weight"))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("exercise", exercise_id));
        }
        Ok(())
    }

    async fn record_completion(&self, record: &CompletionRecord) -> Result<(), StoreError> {
        sqlx::query(
            r"
            INSERT INTO workout_completions (id, workout_id, elapsed_minutes, notes, completed_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(record.id.to_string())
        .bind(record.workout_id.to_string())
        .bind(i64::from(record.elapsed_minutes))
        .bind(&record.notes)
        .bind(record.completed_at)
        .execute(&self.pool)
        .await
        .map_err(query_error("insert completion"))?;
        Ok(())
    }

    async fn record_muscle_groups(&self, entries: &[MuscleGroupEntry]) -> Result<(), StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(query_error("begin transaction"))?;

        for entry in entries {
            sqlx::query(
                r"
                INSERT INTO muscle_group_log (workout_id, muscle_group, sets, logged_at)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(entry.workout_id.to_string())
            .bind(entry.muscle_group.as_str())
            .bind(i64::from(entry.sets))
            .bind(entry.logged_at)
            .execute(&mut *tx)
            .await
            .map_err(query_error("insert muscle log entry"))?;
        }

        tx.commit().await.map_err(query_error("commit muscle log"))
    }
}

fn query_error(operation: &'static str) -> impl FnOnce(SqlxError) -> StoreError {
    move |e| StoreError::database(format!("{operation}: {e}"))
}

fn get_column<'r, T>(row: &'r SqliteRow, table: &'static str, column: &str) -> Result<T, StoreError>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get(column)
        .map_err(|e| StoreError::corrupt(table, format!("{column}: {e}")))
}

fn get_uuid(row: &SqliteRow, table: &'static str, column: &str) -> Result<Uuid, StoreError> {
    let raw: String = get_column(row, table, column)?;
    Uuid::parse_str(&raw).map_err(|e| StoreError::corrupt(table, format!("{column}: {e}")))
}

fn get_u32(row: &SqliteRow, table: &'static str, column: &str) -> Result<u32, StoreError> {
    let raw: i64 = get_column(row, table, column)?;
    u32::try_from(raw).map_err(|_| StoreError::corrupt(table, format!("{column} out of range: {raw}")))
}

fn get_optional_u32(
    row: &SqliteRow,
    table: &'static str,
    column: &str,
) -> Result<Option<u32>, StoreError> {
    let raw: Option<i64> = get_column(row, table, column)?;
    raw.map(|value| {
        u32::try_from(value)
            .map_err(|_| StoreError::corrupt(table, format!("{column} out of range: {value}")))
    })
    .transpose()
}

fn row_to_exercise(row: &SqliteRow) -> Result<ExercisePlan, StoreError> {
    Ok(ExercisePlan {
        id: get_uuid(row, "exercises", "id")?,
        name: get_column(row, "exercises", "name")?,
        sets: get_u32(row, "exercises", "sets")?,
        reps: get_u32(row, "exercises", "reps")?,
        weight: get_column(row, "exercises", "weight")?,
        rest_time_secs: get_optional_u32(row, "exercises", "rest_time_secs")?,
        notes: get_column(row, "exercises", "notes")?,
    })
}

fn row_to_completion(row: &SqliteRow) -> Result<CompletionRecord, StoreError> {
    let completed_at: DateTime<Utc> = get_column(row, "workout_completions", "completed_at")?;
    Ok(CompletionRecord {
        id: get_uuid(row, "workout_completions", "id")?,
        workout_id: get_uuid(row, "workout_completions", "workout_id")?,
        elapsed_minutes: get_u32(row, "workout_completions", "elapsed_minutes")?,
        notes: get_column(row, "workout_completions", "notes")?,
        completed_at,
    })
}

fn row_to_muscle_entry(row: &SqliteRow) -> Result<MuscleGroupEntry, StoreError> {
    let raw_group: String = get_column(row, "muscle_group_log", "muscle_group")?;
    let muscle_group = MuscleGroup::parse(&raw_group).ok_or_else(|| {
        StoreError::corrupt("muscle_group_log", format!("unknown muscle group {raw_group}"))
    })?;
    Ok(MuscleGroupEntry {
        workout_id: get_uuid(row, "muscle_group_log", "workout_id")?,
        muscle_group,
        sets: get_u32(row, "muscle_group_log", "sets")?,
        logged_at: get_column(row, "muscle_group_log", "logged_at")?,
    })
}
