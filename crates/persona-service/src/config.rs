//! Service configuration.

use persona_narrative::EngineOptions;
use persona_signals::CompositeWeights;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;

const ENV_PREFIX: &str = "PERSONA";
const ENV_SEPARATOR: &str = "__";

/// Complete service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Per-client request limits
    pub rate_limit: RateLimitConfig,

    /// Result cache
    pub cache: CacheConfig,

    /// Handle validation
    pub handle: HandleConfig,

    /// Narrative output
    pub narrative: EngineOptions,

    /// Composite blend weights
    pub weights: CompositeWeights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Requests allowed per window
    pub max_requests: u32,

    /// Window length (seconds)
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 3,
            window_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long a stored result is served (seconds)
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 24 * 60 * 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleConfig {
    /// Longest accepted handle (characters)
    pub max_len: usize,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self { max_len: 20 }
    }
}

impl ServiceConfig {
    /// Load configuration from file, with environment overrides
    pub fn from_file(path: &str) -> ServiceResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(Self::environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load from environment variables, e.g. `PERSONA__RATE_LIMIT__MAX_REQUESTS=5`
    pub fn from_env() -> ServiceResult<Self> {
        let settings = config::Config::builder()
            .add_source(Self::environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load from an in-memory TOML document
    pub fn from_toml(contents: &str) -> ServiceResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?;

        Self::finish(settings)
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> ServiceResult<()> {
        if self.rate_limit.max_requests == 0 || self.rate_limit.window_secs == 0 {
            return Err(persona_core::Error::Config(
                "rate limit needs a positive request count and window".to_string(),
            )
            .into());
        }
        if self.handle.max_len == 0 {
            return Err(
                persona_core::Error::Config("handle max_len must be positive".to_string()).into(),
            );
        }
        self.weights.validate()?;
        Ok(())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
    }

    fn finish(settings: config::Config) -> ServiceResult<Self> {
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
