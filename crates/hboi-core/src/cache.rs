// Dweve HBOI - HBO-i Domain Description Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! TTL-bounded key/value cache for validated dataset snapshots.
//!
//! The store is dataset-agnostic: keys are strings, values any cloneable
//! type. Entries expire lazily at read time (no background sweep), and when
//! the store is full the oldest-inserted entry is evicted: insertion-order
//! FIFO, independent of access recency and of remaining TTL.
//!
//! # Thread Safety
//!
//! Uses `DashMap` plus atomic counters, so a cache can be shared behind an
//! `Arc` without external locking.

use dashmap::DashMap;
use regex::Regex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default time-to-live for entries written without an explicit TTL.
const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Default maximum number of entries.
const DEFAULT_MAX_SIZE: usize = 100;

/// Cache configuration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL applied by [`DatasetCache::set`]. `None` means entries written
    /// through `set` never expire.
    pub default_ttl: Option<Duration>,
    /// Maximum number of entries before FIFO eviction kicks in.
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Some(DEFAULT_TTL),
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
    ttl: Option<Duration>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self) -> bool {
        match self.ttl {
            // No TTL means the entry never expires.
            None => false,
            // A zero TTL expires immediately, making the entry write-only.
            Some(ttl) if ttl.is_zero() => true,
            Some(ttl) => self.inserted_at.elapsed() > ttl,
        }
    }
}

/// Snapshot of one live entry, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntryInfo {
    pub key: String,
    /// Milliseconds since insertion.
    pub age_ms: u64,
    /// Effective TTL in milliseconds, absent for never-expiring entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_ms: Option<u64>,
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// `hits / (hits + misses)`, `0.0` before the first request.
    pub hit_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ttl_ms: Option<u64>,
    pub entries: Vec<CacheEntryInfo>,
}

/// TTL-bounded FIFO cache.
///
/// # Example
///
/// ```
/// use hboi_core::cache::{CacheConfig, DatasetCache};
///
/// let cache: DatasetCache<i32> = DatasetCache::new(CacheConfig::default());
/// cache.set("answer", 42);
/// assert_eq!(cache.get("answer"), Some(42));
/// assert_eq!(cache.get("missing"), None);
/// ```
pub struct DatasetCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    /// Keys in insertion order; the front is the eviction candidate.
    insertion_order: Mutex<VecDeque<String>>,
    config: CacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<V: Clone> DatasetCache<V> {
    /// Create a cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            insertion_order: Mutex::new(VecDeque::with_capacity(config.max_size)),
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Store a value under the configured default TTL.
    pub fn set(&self, key: &str, value: V) {
        self.set_with_ttl(key, value, self.config.default_ttl);
    }

    /// Store a value with an explicit TTL.
    ///
    /// `Some(ttl)` overrides the configured default; `None` means the entry
    /// never expires. A zero TTL is honoured as "expired immediately": the
    /// entry is written but every subsequent read misses.
    ///
    /// When the store is at `max_size` and `key` is new, the single
    /// oldest-inserted entry is evicted first.
    pub fn set_with_ttl(&self, key: &str, value: V, ttl: Option<Duration>) {
        let is_new = !self.entries.contains_key(key);
        if is_new && self.entries.len() >= self.config.max_size {
            self.evict_oldest();
        }

        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
                ttl,
            },
        );

        if is_new {
            if let Ok(mut order) = self.insertion_order.lock() {
                order.push_back(key.to_string());
            }
        }
        debug!(key, ?ttl, "cache set");
    }

    /// Look up a fresh value.
    ///
    /// Misses and expired entries return `None`; expiry detected here deletes
    /// the entry eagerly. Both outcomes count towards the hit rate.
    pub fn get(&self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_expired() => true,
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.value.clone());
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key, "cache miss");
                return None;
            }
        };
        if expired {
            self.remove(key);
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key, "cache entry expired");
        }
        None
    }

    /// Whether a fresh entry exists for `key`. Does not touch the counters.
    pub fn has(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    /// Remove one key. Returns whether an entry was present.
    pub fn remove(&self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            if let Ok(mut order) = self.insertion_order.lock() {
                order.retain(|k| k != key);
            }
            debug!(key, "cache entry removed");
        }
        removed
    }

    /// Remove all entries. Counters are kept.
    pub fn clear(&self) {
        let size = self.entries.len();
        self.entries.clear();
        if let Ok(mut order) = self.insertion_order.lock() {
            order.clear();
        }
        debug!(size, "cache cleared");
    }

    /// Remove all keys matching `pattern` (a regex); `None` removes
    /// everything. Returns the number of entries removed. An unparsable
    /// pattern removes nothing.
    pub fn invalidate(&self, pattern: Option<&str>) -> usize {
        let Some(pattern) = pattern else {
            let size = self.entries.len();
            self.clear();
            return size;
        };

        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(error) => {
                warn!(pattern, %error, "invalid cache invalidation pattern");
                return 0;
            }
        };

        let matching: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| regex.is_match(entry.key()))
            .map(|entry| entry.key().clone())
            .collect();
        for key in &matching {
            self.remove(key);
        }
        debug!(pattern, count = matching.len(), "cache invalidated");
        matching.len()
    }

    /// Current statistics, including a snapshot of live entries.
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };

        let entries = self
            .entries
            .iter()
            .map(|entry| CacheEntryInfo {
                key: entry.key().clone(),
                age_ms: entry.inserted_at.elapsed().as_millis() as u64,
                ttl_ms: entry.ttl.map(|ttl| ttl.as_millis() as u64),
            })
            .collect();

        CacheStats {
            size: self.entries.len(),
            max_size: self.config.max_size,
            hits,
            misses,
            evictions: self.evictions.load(Ordering::Relaxed),
            hit_rate,
            default_ttl_ms: self.config.default_ttl.map(|ttl| ttl.as_millis() as u64),
            entries,
        }
    }

    /// All live keys, unordered.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evict the oldest-inserted surviving entry.
    fn evict_oldest(&self) {
        if let Ok(mut order) = self.insertion_order.lock() {
            // The queue may hold keys already removed through other paths.
            while let Some(key) = order.pop_front() {
                if self.entries.remove(&key).is_some() {
                    self.evictions.fetch_add(1, Ordering::Relaxed);
                    debug!(key = %key, "evicted oldest cache entry");
                    break;
                }
            }
        }
    }
}

impl<V: Clone> Default for DatasetCache<V> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
