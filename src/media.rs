// ABOUTME: Exercise media lookup (demonstration image or video) with an LRU cache in front
// ABOUTME: Providers are pluggable; the cache is keyed by normalized exercise name and remembers misses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftMate Contributors

use async_trait::async_trait;
use liftmate_core::constants::media::DEFAULT_MEDIA_CACHE_ENTRIES;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Demonstration media for one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseMedia {
    /// Still image URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Video URL
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Source of exercise media
#[async_trait]
pub trait ExerciseMediaProvider: Send + Sync {
    /// Media for an exercise name, or `None` when nothing is known
    async fn find_media(&self, exercise_name: &str) -> Option<ExerciseMedia>;
}

/// Map-backed provider, matching names case-insensitively
#[derive(Debug, Clone, Default)]
pub struct StaticMediaProvider {
    entries: HashMap<String, ExerciseMedia>,
}

impl StaticMediaProvider {
    /// Build from `(exercise name, media)` pairs
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (String, ExerciseMedia)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, media)| (normalize_name(&name), media))
                .collect(),
        }
    }

    /// Number of known exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No exercises known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ExerciseMediaProvider for StaticMediaProvider {
    async fn find_media(&self, exercise_name: &str) -> Option<ExerciseMedia> {
        self.entries.get(&normalize_name(exercise_name)).cloned()
    }
}

/// LRU cache in front of any media provider.
///
/// Misses are cached as well, so an unknown exercise costs one provider call
/// until it is evicted.
pub struct CachedMediaLookup {
    provider: Arc<dyn ExerciseMediaProvider>,
    cache: Mutex<LruCache<String, Option<ExerciseMedia>>>,
}

impl CachedMediaLookup {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MEDIA_CACHE_ENTRIES) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Wrap `provider` with a cache of `capacity` names (zero uses the default)
    #[must_use]
    pub fn new(provider: Arc<dyn ExerciseMediaProvider>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            provider,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Media for an exercise, served from cache when possible
    pub async fn lookup(&self, exercise_name: &str) -> Option<ExerciseMedia> {
        let key = normalize_name(exercise_name);
        if key.is_empty() {
            return None;
        }

        if let Some(cached) = self.cache.lock().await.get(&key) {
            debug!(exercise = %key, hit = cached.is_some(), "Media cache hit");
            return cached.clone();
        }

        // Lock released during the provider call
        let media = self.provider.find_media(exercise_name).await;
        debug!(exercise = %key, found = media.is_some(), "Media cache miss");
        self.cache.lock().await.put(key, media.clone());
        media
    }

    /// Number of cached names
    pub async fn cached_entries(&self) -> usize {
        self.cache.lock().await.len()
    }
}

/// Lowercase, trimmed, single-spaced form of an exercise name
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
