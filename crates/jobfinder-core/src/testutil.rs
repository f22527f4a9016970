//! Test utilities: an in-memory `JobCache` mock.
//!
//! Handwritten mock for dependency injection in unit tests. State lives in
//! `Arc<Mutex<_>>` so clones share it and tests can assert on what the
//! services did to the cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{Job, JobCollection};
use crate::traits::JobCache;

/// Build a collection of fresh jobs with the given titles.
pub fn collection(category: &str, titles: &[&str]) -> JobCollection {
    JobCollection::new(category, titles.iter().map(|t| Job::new(*t)).collect())
}

#[derive(Default)]
struct MemoryState {
    registry: Vec<String>,
    collections: HashMap<String, Vec<u8>>,
    counters: HashMap<String, i64>,
    increment_calls: usize,
    fail_reads: bool,
    fail_increments: bool,
}

/// In-memory cache. Increments happen under the mutex, so they are atomic.
#[derive(Clone, Default)]
pub struct MemoryCache {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(self, keys: &[&str]) -> Self {
        self.state.lock().unwrap().registry = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_collection(self, key: &str, collection: &JobCollection) -> Self {
        let bytes = serde_json::to_vec(collection).unwrap();
        self.with_raw_collection(key, &bytes)
    }

    pub fn with_raw_collection(self, key: &str, bytes: &[u8]) -> Self {
        self.state
            .lock()
            .unwrap()
            .collections
            .insert(key.to_string(), bytes.to_vec());
        self
    }

    pub fn with_counter(self, slug: &str, count: i64) -> Self {
        self.state
            .lock()
            .unwrap()
            .counters
            .insert(slug.to_string(), count);
        self
    }

    /// Make every read (registry, collection, counter, ping) fail.
    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    /// Make every increment fail.
    pub fn fail_increments(&self, fail: bool) {
        self.state.lock().unwrap().fail_increments = fail;
    }

    pub fn counter(&self, slug: &str) -> i64 {
        self.state
            .lock()
            .unwrap()
            .counters
            .get(slug)
            .copied()
            .unwrap_or(0)
    }

    pub fn increment_calls(&self) -> usize {
        self.state.lock().unwrap().increment_calls
    }
}

fn unavailable() -> AppError {
    AppError::StoreUnavailable("memory cache configured to fail".into())
}

impl JobCache for MemoryCache {
    async fn list_registry(&self) -> Result<Vec<String>, AppError> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(unavailable());
        }
        Ok(state.registry.clone())
    }

    async fn get_collection(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(unavailable());
        }
        Ok(state.collections.get(key).cloned())
    }

    async fn get_counter(&self, slug: &str) -> Result<i64, AppError> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(unavailable());
        }
        Ok(state.counters.get(slug).copied().unwrap_or(0))
    }

    async fn increment_counter(&self, slug: &str) -> Result<i64, AppError> {
        let mut state = self.state.lock().unwrap();
        state.increment_calls += 1;
        if state.fail_increments {
            return Err(unavailable());
        }
        let count = state.counters.entry(slug.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.state.lock().unwrap().fail_reads {
            return Err(unavailable());
        }
        Ok(())
    }
}
