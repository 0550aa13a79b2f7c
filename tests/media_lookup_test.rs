// ABOUTME: Tests for cached exercise media lookups
// ABOUTME: Verifies name normalization, miss caching, and LRU eviction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use liftmate::media::{
    normalize_name, CachedMediaLookup, ExerciseMedia, ExerciseMediaProvider, StaticMediaProvider,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Provider that counts calls and knows a single exercise
#[derive(Default)]
struct CountingProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl ExerciseMediaProvider for CountingProvider {
    async fn find_media(&self, exercise_name: &str) -> Option<ExerciseMedia> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (normalize_name(exercise_name) == "deadlift").then(|| ExerciseMedia {
            image_url: None,
            video_url: Some("https://media.example/deadlift.mp4".to_owned()),
        })
    }
}

#[test]
fn test_normalize_name() {
    assert_eq!(normalize_name("  Bench   PRESS "), "bench press");
    assert_eq!(normalize_name(""), "");
}

#[tokio::test]
async fn test_static_provider_matches_case_insensitively() {
    let media = ExerciseMedia {
        image_url: Some("https://media.example/squat.png".to_owned()),
        video_url: None,
    };
    let provider = StaticMediaProvider::new([("Back Squat".to_owned(), media.clone())]);

    assert_eq!(provider.len(), 1);
    assert_eq!(provider.find_media("back  squat").await, Some(media));
    assert_eq!(provider.find_media("Front Squat").await, None);
}

#[tokio::test]
async fn test_hits_and_misses_are_cached() {
    let provider = Arc::new(CountingProvider::default());
    let lookup = CachedMediaLookup::new(provider.clone(), 8);

    assert!(lookup.lookup("Deadlift").await.is_some());
    assert!(lookup.lookup("  deadlift").await.is_some());
    assert!(lookup.lookup("Jumping Jacks").await.is_none());
    assert!(lookup.lookup("jumping jacks").await.is_none());

    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    assert_eq!(lookup.cached_entries().await, 2);
}

#[tokio::test]
async fn test_least_recently_used_name_is_evicted() {
    let provider = Arc::new(CountingProvider::default());
    let lookup = CachedMediaLookup::new(provider.clone(), 2);

    lookup.lookup("a").await;
    lookup.lookup("b").await;
    lookup.lookup("a").await;
    lookup.lookup("c").await;
    assert_eq!(provider.calls.load(Ordering::SeqCst), 3);

    lookup.lookup("a").await;
    assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
    lookup.lookup("b").await;
    assert_eq!(provider.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_blank_name_skips_provider() {
    let provider = Arc::new(CountingProvider::default());
    let lookup = CachedMediaLookup::new(provider.clone(), 0);

    assert!(lookup.lookup("   ").await.is_none());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}
