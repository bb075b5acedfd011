//! Request orchestration: rate limit, sanitize, cache, classify, evaluate,
//! store.

use std::sync::Arc;
use std::time::Duration;

use persona_core::AvatarClass;
use persona_narrative::PersonaEngine;
use tracing::{debug, info, warn};

use crate::ai::{build_prompt, parse_ai_response, AiAnalysis};
use crate::collaborators::{
    AiAnalyzer, AvatarClassifier, RateDecision, RateLimiter, ResultStore, StoredResult,
};
use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::memory::{FixedWindowRateLimiter, InMemoryResultStore};
use crate::validation::sanitize_handle;

/// What [`ProfileService::evaluate`] hands back
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub stored: StoredResult,
    /// Served from the result store instead of computed
    pub cached: bool,
}

pub struct ProfileService {
    engine: PersonaEngine,
    avatars: Arc<dyn AvatarClassifier>,
    store: Arc<dyn ResultStore>,
    limiter: Arc<dyn RateLimiter>,
    ai: Option<Arc<dyn AiAnalyzer>>,
    max_handle_len: usize,
}

impl ProfileService {
    pub fn new(
        engine: PersonaEngine,
        avatars: Arc<dyn AvatarClassifier>,
        store: Arc<dyn ResultStore>,
        limiter: Arc<dyn RateLimiter>,
        max_handle_len: usize,
    ) -> Self {
        Self {
            engine,
            avatars,
            store,
            limiter,
            ai: None,
            max_handle_len,
        }
    }

    /// Service with in-memory store and limiter sized from `config`
    pub fn from_config(
        config: &ServiceConfig,
        avatars: Arc<dyn AvatarClassifier>,
    ) -> ServiceResult<Self> {
        config.validate()?;

        let engine = PersonaEngine::new(config.weights.clone(), config.narrative)?;
        let store = InMemoryResultStore::new(Duration::from_secs(config.cache.ttl_secs));
        let limiter = FixedWindowRateLimiter::new(
            config.rate_limit.max_requests,
            Duration::from_secs(config.rate_limit.window_secs),
        );

        Ok(Self::new(
            engine,
            avatars,
            Arc::new(store),
            Arc::new(limiter),
            config.handle.max_len,
        ))
    }

    pub fn with_ai(mut self, ai: Arc<dyn AiAnalyzer>) -> Self {
        self.ai = Some(ai);
        self
    }

    async fn admit(&self, client: &str, raw_handle: &str) -> ServiceResult<String> {
        match self.limiter.check(client).await {
            RateDecision::Allowed { remaining } => {
                debug!(client, remaining, "request admitted");
            }
            RateDecision::Limited { retry_after_secs } => {
                warn!(client, retry_after_secs, "rate limit exceeded");
                return Err(ServiceError::RateLimited { retry_after_secs });
            }
        }

        Ok(sanitize_handle(raw_handle, self.max_handle_len)?)
    }

    /// Evaluate a handle for `client`, serving a stored result when one is fresh
    pub async fn evaluate(
        &self,
        client: &str,
        raw_handle: &str,
        bio: &str,
    ) -> ServiceResult<Evaluation> {
        let handle = self.admit(client, raw_handle).await?;

        if let Some(stored) = self.store.get(&handle).await? {
            info!(handle = %handle, id = %stored.id, "serving stored result");
            return Ok(Evaluation {
                stored,
                cached: true,
            });
        }

        let avatar = match self.avatars.classify(&handle).await {
            Ok(class) => class,
            Err(e) => {
                warn!(handle = %handle, error = %e, "avatar lookup failed, using unknown");
                AvatarClass::Unknown
            }
        };

        let result = self.engine.evaluate_raw(&handle, avatar, bio)?;
        info!(
            handle = %handle,
            avatar = avatar.as_str(),
            dominance = result.dominance_type.label(),
            category = result.narrative_category.as_str(),
            "profile evaluated"
        );

        let stored = self.store.put(result).await?;
        Ok(Evaluation {
            stored,
            cached: false,
        })
    }

    /// Ask the configured model for an independent analysis
    pub async fn ai_analysis(
        &self,
        client: &str,
        raw_handle: &str,
        avatar_url: Option<&str>,
        bio: &str,
    ) -> ServiceResult<AiAnalysis> {
        let ai = self
            .ai
            .as_ref()
            .ok_or_else(|| ServiceError::Ai("no AI analyzer configured".to_string()))?;
        let handle = self.admit(client, raw_handle).await?;

        let prompt = build_prompt(&handle, avatar_url, bio);
        let completion = ai.complete(&prompt).await?;
        let analysis = parse_ai_response(&completion)?;

        info!(handle = %handle, backend = ai.name(), "AI analysis complete");
        Ok(analysis)
    }
}
