//! # Persona-Narrative
//!
//! Turns composite scores into prose: a short, lightly humorous commentary
//! picked from a category pool, and an optional deterministic report covering
//! intimacy style, partner preferences and an ideal-partner portrait.
//!
//! [`PersonaEngine`] ties the signal pipeline and the synthesizer together and
//! is the entry point most callers want.

pub mod commentary;
pub mod engine;
pub mod intimacy;
pub mod partner;
pub mod report;
pub mod synthesizer;
pub mod templates;

pub use commentary::{CategoryInput, NarrativeCategory};
pub use engine::{EngineOptions, PersonaEngine, ProfileDetails, ProfileResult};
pub use intimacy::{dominance_index, IntimacyReport};
pub use partner::{dominance_match, partner_keywords, IdealPartner, MatePreference};
pub use report::{ExtendedReport, ReportSection};
pub use synthesizer::{Commentary, NarrativeSynthesizer};
