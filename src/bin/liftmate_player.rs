// ABOUTME: LiftMate player CLI - plays a workout interactively from the terminal
// ABOUTME: Seeds plans into the database and drives a guided session from stdin commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors
//!
//! Usage:
//! ```bash
//! # Store a plan and print its workout id
//! liftmate-player seed --plan push_day.json --database-url sqlite:./liftmate.db
//!
//! # Play a stored workout
//! liftmate-player run --workout-id 7f1c... --database-url sqlite:./liftmate.db
//!
//! # Play a plan file without a database
//! liftmate-player run --plan push_day.json
//! ```
//!
//! Session commands: `done`, `skip`, `pause`, `weight <kg|none>`,
//! `notes <text>`, `status`, `finish`, `quit`.

use clap::{Args, Parser, Subcommand};
use liftmate::config::PlayerConfig;
use liftmate::logging::LoggingConfig;
use liftmate::media::{CachedMediaLookup, ExerciseMedia, StaticMediaProvider};
use liftmate::session::{SessionController, SessionEvent, SessionPhase, SessionSnapshot};
use liftmate::store::{InMemoryWorkoutStore, SqliteWorkoutStore, WorkoutStore};
use liftmate_core::errors::{AppError, AppResult};
use liftmate_core::models::WorkoutPlan;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::fs;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "liftmate-player",
    about = "LiftMate guided workout player",
    long_about = "Plays a strength workout set by set with rest countdowns and records the completion."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Store a plan file and print its workout id
    Seed {
        /// Plan file (JSON)
        #[arg(long)]
        plan: PathBuf,
    },

    /// Play a workout interactively
    Run(RunArgs),
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct RunArgs {
    /// Stored workout to play
    #[arg(long)]
    workout_id: Option<Uuid>,

    /// Plan file to play
    #[arg(long)]
    plan: Option<PathBuf>,
}

/// Plan file: a workout plan plus optional demonstration media per exercise name
#[derive(Debug, Deserialize)]
struct PlanFile {
    #[serde(flatten)]
    plan: WorkoutPlan,
    #[serde(default)]
    media: HashMap<String, ExerciseMedia>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = PlayerConfig::from_env()?;
    let database_override = cli.database_url.is_some();
    if let Some(url) = cli.database_url {
        config = config.with_database_url(url);
    }

    match cli.command {
        Command::Seed { plan } => seed(&config, &plan).await,
        Command::Run(args) => {
            let (store, workout_id, media) =
                prepare_run(&config, args, database_override).await?;
            play(store, workout_id, media, &config).await
        }
    }
}

async fn seed(config: &PlayerConfig, plan_path: &Path) -> AppResult<()> {
    let plan_file = read_plan_file(plan_path).await?;
    let store = open_database(&config.database_url).await?;
    store.insert_workout(&plan_file.plan).await?;
    info!(
        workout_id = %plan_file.plan.workout_id,
        exercises = plan_file.plan.exercises.len(),
        "Workout plan stored"
    );
    println!("{}", plan_file.plan.workout_id);
    Ok(())
}

async fn prepare_run(
    config: &PlayerConfig,
    args: RunArgs,
    database_override: bool,
) -> AppResult<(Arc<dyn WorkoutStore>, Uuid, StaticMediaProvider)> {
    match (args.workout_id, args.plan) {
        (Some(workout_id), _) => {
            let store = open_database(&config.database_url).await?;
            Ok((Arc::new(store), workout_id, StaticMediaProvider::default()))
        }
        (None, Some(plan_path)) => {
            let plan_file = read_plan_file(&plan_path).await?;
            let workout_id = plan_file.plan.workout_id;
            let media = StaticMediaProvider::new(plan_file.media);

            let store: Arc<dyn WorkoutStore> = if database_override {
                let store = open_database(&config.database_url).await?;
                store.insert_workout(&plan_file.plan).await?;
                Arc::new(store)
            } else {
                let store = InMemoryWorkoutStore::new();
                store.insert_workout(plan_file.plan);
                Arc::new(store)
            };
            Ok((store, workout_id, media))
        }
        (None, None) => Err(AppError::invalid_input(
            "either --workout-id or --plan is required",
        )),
    }
}

async fn open_database(database_url: &str) -> AppResult<SqliteWorkoutStore> {
    info!("Connecting to database: {}", database_url);
    Ok(SqliteWorkoutStore::connect(database_url).await?)
}

async fn read_plan_file(path: &Path) -> AppResult<PlanFile> {
    let raw = fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("cannot read plan file {}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&raw)?)
}

async fn play(
    store: Arc<dyn WorkoutStore>,
    workout_id: Uuid,
    media: StaticMediaProvider,
    config: &PlayerConfig,
) -> AppResult<()> {
    let mut session = SessionController::start(store, workout_id, config.session.clone()).await?;
    let lookup = Arc::new(CachedMediaLookup::new(
        Arc::new(media),
        config.session.media_cache_capacity,
    ));

    let initial = session.snapshot().await;
    print_snapshot(&initial);
    show_media(&lookup, initial.exercise_name.as_deref()).await;
    let printer = tokio::spawn(print_updates(session.subscribe(), lookup, initial));

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        let line = lines
            .next_line()
            .await
            .map_err(|e| AppError::internal("failed to read stdin").with_source(e))?;
        let Some(line) = line else {
            info!("Input closed, leaving session");
            break;
        };

        let (command, argument) = line
            .trim()
            .split_once(' ')
            .map_or((line.trim(), ""), |(cmd, arg)| (cmd, arg.trim()));

        match command {
            "" => {}
            "done" => report(&session.complete_set().await),
            "skip" => report(&session.skip_rest().await),
            "pause" => report(&session.toggle_pause().await),
            "weight" => match parse_weight(argument) {
                Ok(weight) => match session.edit_weight(weight).await {
                    Ok(event) => report(&event),
                    Err(e) => println!("! {e}"),
                },
                Err(e) => println!("! {e}"),
            },
            "notes" => report(&session.set_notes(argument).await),
            "status" => print_snapshot(&session.snapshot().await),
            "finish" => match session.finalize().await {
                Ok(Some(record)) => {
                    println!(
                        "Workout recorded: {} minutes (completion {})",
                        record.elapsed_minutes, record.id
                    );
                    break;
                }
                Ok(None) => println!("! workout is not complete yet"),
                Err(e) => {
                    warn!(error = %e, "Finalize failed");
                    println!("! {e} (type `finish` to retry)");
                }
            },
            "quit" => break,
            other => println!("! unknown command `{other}`"),
        }
    }

    printer.abort();
    session.cancel();
    Ok(())
}

async fn print_updates(
    mut snapshots: watch::Receiver<SessionSnapshot>,
    lookup: Arc<CachedMediaLookup>,
    mut last: SessionSnapshot,
) {
    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();
        if snapshot == last {
            continue;
        }
        print_snapshot(&snapshot);
        if snapshot.exercise_name != last.exercise_name {
            show_media(&lookup, snapshot.exercise_name.as_deref()).await;
        }
        last = snapshot;
    }
}

async fn show_media(lookup: &CachedMediaLookup, exercise_name: Option<&str>) {
    let Some(name) = exercise_name else {
        return;
    };
    if let Some(media) = lookup.lookup(name).await {
        if let Some(url) = media.video_url.or(media.image_url) {
            println!("  media: {url}");
        }
    }
}

fn parse_weight(argument: &str) -> AppResult<Option<f64>> {
    match argument {
        "none" | "-" => Ok(None),
        raw => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| AppError::invalid_input(format!("not a weight: `{raw}`"))),
    }
}

fn report(event: &SessionEvent) {
    if let SessionEvent::Ignored { operation, phase } = event {
        println!("! `{operation}` is not available while {}", phase.name());
    }
}

fn print_snapshot(snapshot: &SessionSnapshot) {
    let progress = snapshot.progress_percent;
    match snapshot.phase {
        SessionPhase::Active => {
            let name = snapshot.exercise_name.as_deref().unwrap_or("?");
            let sets = snapshot.sets_in_exercise.unwrap_or(1);
            let reps = snapshot.reps.unwrap_or(0);
            let weight = snapshot
                .weight
                .map_or_else(|| "bodyweight".to_owned(), |w| format!("{w} kg"));
            println!(
                "[{progress:5.1}%] {name}: set {}/{sets}, {reps} reps @ {weight}",
                snapshot.position.set_index + 1
            );
        }
        SessionPhase::Resting {
            remaining_secs,
            paused,
        } => {
            let state = if paused { " (paused)" } else { "" };
            println!("[{progress:5.1}%] rest {remaining_secs}s{state}");
        }
        SessionPhase::Complete => {
            if snapshot.is_empty {
                println!("[100.0%] this workout has no exercises; type `finish` to record it");
            } else {
                println!("[100.0%] workout complete; add `notes <text>` then `finish`");
            }
        }
    }
}
