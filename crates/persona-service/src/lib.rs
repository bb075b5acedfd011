//! # Persona-Service
//!
//! Everything around the pure engine: collaborator interfaces, in-memory
//! store and rate limiter, avatar URL classification, the optional AI path,
//! configuration and tracing setup.
//!
//! ## Request Flow
//!
//! 1. Rate-limit the client
//! 2. Sanitize the handle
//! 3. Serve a fresh stored result if there is one
//! 4. Classify the avatar (failures degrade to `unknown`)
//! 5. Evaluate with [`persona_narrative::PersonaEngine`] and store the result

pub mod ai;
pub mod avatar;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod memory;
pub mod orchestrator;
pub mod telemetry;
pub mod validation;

pub use ai::{build_prompt, parse_ai_response, AiAnalysis, AiNarrative};
pub use avatar::{classify_avatar_url, UrlAvatarClassifier};
pub use collaborators::*;
pub use config::*;
pub use error::{ServiceError, ServiceResult};
pub use memory::{FixedWindowRateLimiter, InMemoryResultStore};
pub use orchestrator::{Evaluation, ProfileService};
pub use telemetry::init_tracing;
pub use validation::sanitize_handle;
