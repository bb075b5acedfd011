//! Capability traits for everything the engine does not do itself.
//!
//! The service only talks to these traits; [`crate::memory`] and
//! [`crate::avatar`] provide in-process implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use persona_core::AvatarClass;
use persona_narrative::ProfileResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServiceResult;

/// Looks up a handle's avatar and reports what kind of picture it is
#[async_trait]
pub trait AvatarClassifier: Send + Sync {
    async fn classify(&self, handle: &str) -> ServiceResult<AvatarClass>;
}

/// A result as persisted by a [`ResultStore`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResult {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub result: ProfileResult,
}

/// Persists results keyed by handle
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Fresh result for a handle, if any (keys are case-insensitive)
    async fn get(&self, handle: &str) -> ServiceResult<Option<StoredResult>>;

    /// Store a result, replacing any previous one for the same handle
    async fn put(&self, result: ProfileResult) -> ServiceResult<StoredResult>;
}

/// Outcome of a rate-limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Limited { retry_after_secs: u64 },
}

/// Counts requests per client
#[async_trait]
pub trait RateLimiter: Send + Sync {
    async fn check(&self, client: &str) -> RateDecision;
}

/// Language-model backend for the optional AI analysis path
#[async_trait]
pub trait AiAnalyzer: Send + Sync {
    /// Send a prompt and return the raw completion text
    async fn complete(&self, prompt: &str) -> ServiceResult<String>;

    fn name(&self) -> &'static str;
}
