//! Narrative synthesizer: short commentary plus the optional extended report.
//!
//! The only source of non-determinism in the whole pipeline is the template
//! choice, drawn from an owned [`StdRng`]. Seed it to make results
//! reproducible.

use parking_lot::Mutex;
use persona_signals::CompositeScore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::commentary::{CategoryInput, NarrativeCategory};
use crate::report::ExtendedReport;

/// A category and the template drawn for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    pub category: NarrativeCategory,
    pub text: String,
}

pub struct NarrativeSynthesizer {
    rng: Mutex<StdRng>,
}

impl NarrativeSynthesizer {
    /// Synthesizer seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Synthesizer with reproducible template choices
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn commentary(&self, score: &CompositeScore) -> Commentary {
        let category = NarrativeCategory::select(&CategoryInput {
            big_five: score.big_five,
            avatar_class: score.avatar_class,
            handle_style: score.handle_style,
        });
        let text = category.pick(&mut *self.rng.lock());

        tracing::debug!(category = category.as_str(), "selected commentary");

        Commentary {
            category,
            text: text.to_string(),
        }
    }

    /// Deterministic long-form report; does not touch the generator
    pub fn extended_report(&self, score: &CompositeScore) -> ExtendedReport {
        ExtendedReport::build(&score.big_five, score.dominance_score, score.avatar_class)
    }
}

impl Default for NarrativeSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NarrativeSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeSynthesizer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_core::{AvatarClass, RawSignals};
    use persona_signals::ProfileAnalyzer;

    fn score(handle: &str, avatar: AvatarClass, bio: &str) -> CompositeScore {
        let signals = RawSignals::new(handle, avatar, bio).unwrap();
        ProfileAnalyzer::default().analyze(&signals).score
    }

    #[test]
    fn test_seeded_commentary_is_reproducible() {
        let score = score("johnsmith", AvatarClass::RealPhoto, "");

        let a = NarrativeSynthesizer::with_seed(42);
        let b = NarrativeSynthesizer::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.commentary(&score), b.commentary(&score));
        }
    }

    #[test]
    fn test_commentary_comes_from_category_pool() {
        let synthesizer = NarrativeSynthesizer::new();
        let score = score("xK7qzpl", AvatarClass::DefaultCartoon, "");

        for _ in 0..20 {
            let commentary = synthesizer.commentary(&score);
            assert_eq!(commentary.category, NarrativeCategory::Mysterious);
            assert!(commentary.category.templates().contains(&commentary.text.as_str()));
        }
    }

    #[test]
    fn test_balanced_profile() {
        // johnsmith/RealPhoto lands at E 66, O 63: neither high nor mysterious
        let score = score("johnsmith", AvatarClass::RealPhoto, "");
        let commentary = NarrativeSynthesizer::with_seed(1).commentary(&score);
        assert_eq!(commentary.category, NarrativeCategory::Balanced);
    }

    #[test]
    fn test_extended_report_ignores_generator_state() {
        let score = score("johnsmith", AvatarClass::RealPhoto, "");
        let synthesizer = NarrativeSynthesizer::with_seed(3);

        let before = synthesizer.extended_report(&score);
        synthesizer.commentary(&score);
        let after = synthesizer.extended_report(&score);
        assert_eq!(before, after);
    }
}
