//! In-process result store and rate limiter.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use persona_narrative::ProfileResult;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::collaborators::{RateDecision, RateLimiter, ResultStore, StoredResult};
use crate::error::ServiceResult;
use crate::validation::cache_key;

/// Result store held in memory, entries expire after a fixed TTL
pub struct InMemoryResultStore {
    entries: RwLock<HashMap<String, StoredResult>>,
    ttl: Duration,
}

impl InMemoryResultStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn is_fresh(&self, entry: &StoredResult) -> bool {
        // clock skew can make the age negative; treat that as brand new
        (Utc::now() - entry.created_at)
            .to_std()
            .map_or(true, |age| age < self.ttl)
    }

    fn drop_stale(&self, entries: &mut HashMap<String, StoredResult>) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| self.is_fresh(entry));
        before - entries.len()
    }

    /// Drop expired entries, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        self.drop_stale(&mut entries)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn get(&self, handle: &str) -> ServiceResult<Option<StoredResult>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(&cache_key(handle))
            .filter(|entry| self.is_fresh(entry))
            .cloned())
    }

    async fn put(&self, result: ProfileResult) -> ServiceResult<StoredResult> {
        let stored = StoredResult {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            result,
        };

        // expired entries are swept on every write
        let mut entries = self.entries.write().await;
        let purged = self.drop_stale(&mut entries);
        entries.insert(cache_key(&stored.result.handle), stored.clone());
        drop(entries);

        tracing::debug!(handle = %stored.result.handle, id = %stored.id, purged, "stored result");
        Ok(stored)
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window limiter: `max_requests` per client per `window`
pub struct FixedWindowRateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl FixedWindowRateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn check_at(&self, client: &str, now: Instant) -> RateDecision {
        let mut windows = self.windows.lock();
        windows.retain(|_, w| w.reset_at > now);

        let window = windows.entry(client.to_string()).or_insert(Window {
            count: 0,
            reset_at: now + self.window,
        });

        if window.count >= self.max_requests {
            let wait = window.reset_at.saturating_duration_since(now);
            let retry_after_secs = wait.as_millis().div_ceil(1000).max(1) as u64;
            return RateDecision::Limited { retry_after_secs };
        }

        window.count += 1;
        RateDecision::Allowed {
            remaining: self.max_requests - window.count,
        }
    }

    /// Clients with an open window
    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().len()
    }
}

#[async_trait]
impl RateLimiter for FixedWindowRateLimiter {
    async fn check(&self, client: &str) -> RateDecision {
        self.check_at(client, Instant::now())
    }
}
