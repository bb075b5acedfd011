//! Composite scoring: blend the three feature records into Big Five traits,
//! agent/human attractiveness and a dominance score.
//!
//! ## Blends
//!
//! | Trait | Handle | Avatar | Bio |
//! |-------|--------|--------|-----|
//! | Extraversion | 0.3 | 0.5 | 0.2 |
//! | Openness | 0.4 | 0.3 | 0.3 |
//! | Conscientiousness | 0.6 | 0.4 | - |
//!
//! Agreeableness passes the avatar estimate through and neuroticism is held
//! at the neutral midpoint; no signal estimates either one yet.

use persona_core::thresholds::{
    ATTRACTION_SCALE, DOMINANCE_BASE, DOMINANCE_EXTRAVERSION_MILD, DOMINANCE_EXTRAVERSION_STRONG,
    HIGH_TRAIT, LOW_TRAIT, NEUTRAL, SCORE_MAX, SUBMISSION_EXTRAVERSION_MILD,
    SUBMISSION_EXTRAVERSION_STRONG, VERY_HIGH_OPENNESS,
};
use persona_core::{to_score, AvatarClass, BigFive, DominanceType, Error, HandleStyle, Result};
use serde::{Deserialize, Serialize};

use crate::avatar::AvatarFeatures;
use crate::bio::BioFeatures;
use crate::handle::HandleFeatures;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Per-signal weights for one blended trait
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub handle: f64,
    pub avatar: f64,
    pub bio: f64,
}

impl SignalWeights {
    pub const fn new(handle: f64, avatar: f64, bio: f64) -> Self {
        Self { handle, avatar, bio }
    }

    fn sum(&self) -> f64 {
        self.handle + self.avatar + self.bio
    }

    fn min(&self) -> f64 {
        self.handle.min(self.avatar).min(self.bio)
    }

    fn blend(&self, handle: u8, avatar: u8, bio: u8) -> f64 {
        handle as f64 * self.handle + avatar as f64 * self.avatar + bio as f64 * self.bio
    }
}

/// Three-way weights for a composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub attraction: f64,
    pub primary: f64,
    pub secondary: f64,
}

impl ComponentWeights {
    fn sum(&self) -> f64 {
        self.attraction + self.primary + self.secondary
    }

    fn min(&self) -> f64 {
        self.attraction.min(self.primary).min(self.secondary)
    }
}

/// Configuration for the composite blends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    pub extraversion: SignalWeights,
    pub openness: SignalWeights,
    pub conscientiousness: SignalWeights,
    /// attraction · openness · professionalism
    pub agent: ComponentWeights,
    /// attraction · extraversion · conscientiousness
    pub human: ComponentWeights,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            extraversion: SignalWeights::new(0.3, 0.5, 0.2),
            openness: SignalWeights::new(0.4, 0.3, 0.3),
            conscientiousness: SignalWeights::new(0.6, 0.4, 0.0),
            agent: ComponentWeights {
                attraction: 0.4,
                primary: 0.3,
                secondary: 0.3,
            },
            human: ComponentWeights {
                attraction: 0.4,
                primary: 0.35,
                secondary: 0.25,
            },
        }
    }
}

impl CompositeWeights {
    /// Every weight set must be non-negative and sum to 1.0
    pub fn validate(&self) -> Result<()> {
        let sets = [
            ("extraversion", self.extraversion.sum(), self.extraversion.min()),
            ("openness", self.openness.sum(), self.openness.min()),
            ("conscientiousness", self.conscientiousness.sum(), self.conscientiousness.min()),
            ("agent", self.agent.sum(), self.agent.min()),
            ("human", self.human.sum(), self.human.min()),
        ];

        for (name, sum, min) in sets {
            if min < 0.0 {
                return Err(Error::Config(format!("{name} weights must not be negative")));
            }
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(Error::Config(format!(
                    "{name} weights must sum to 1.0, got {sum:.3}"
                )));
            }
        }

        // The bio carries no conscientiousness estimate
        if self.conscientiousness.bio != 0.0 {
            return Err(Error::Config(
                "conscientiousness weights cannot include the bio signal".to_string(),
            ));
        }

        Ok(())
    }
}

/// Inputs behind the agent score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentComponents {
    pub interaction_friendliness: u8,
    pub content_potential: u8,
    pub tech_affinity: u8,
}

/// Inputs behind the human score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanComponents {
    pub authenticity: u8,
    pub social_activity: u8,
    pub professionalism: u8,
}

/// Composite scores for one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub big_five: BigFive,
    pub agent_score: u8,
    pub human_score: u8,
    pub dominance_score: u8,
    /// Handle style the scores were derived from
    pub handle_style: HandleStyle,
    /// Avatar class the scores were derived from
    pub avatar_class: AvatarClass,
    pub agent_components: AgentComponents,
    pub human_components: HumanComponents,
}

impl CompositeScore {
    pub fn dominance(&self) -> DominanceType {
        DominanceType::from_score(self.dominance_score)
    }
}

/// Composite scorer
#[derive(Debug, Clone, Default)]
pub struct CompositeScorer {
    weights: CompositeWeights,
}

impl CompositeScorer {
    pub fn new(weights: CompositeWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn score(
        &self,
        handle: &HandleFeatures,
        avatar: &AvatarFeatures,
        bio: &BioFeatures,
    ) -> CompositeScore {
        let w = &self.weights;

        let big_five = BigFive::new(
            to_score(w.extraversion.blend(handle.extraversion, avatar.extraversion, bio.extraversion)),
            to_score(w.openness.blend(handle.openness, avatar.openness, bio.openness)),
            avatar.agreeableness,
            to_score(w.conscientiousness.blend(handle.conscientiousness, avatar.conscientiousness, 0)),
            NEUTRAL,
        );

        let agent_components = AgentComponents {
            interaction_friendliness: attraction_score(avatar.agent_attraction),
            content_potential: big_five.openness,
            tech_affinity: handle.professionalism.unwrap_or(NEUTRAL),
        };
        let agent_score = to_score(
            agent_components.interaction_friendliness as f64 * w.agent.attraction
                + agent_components.content_potential as f64 * w.agent.primary
                + agent_components.tech_affinity as f64 * w.agent.secondary,
        );

        let human_components = HumanComponents {
            authenticity: attraction_score(avatar.human_attraction),
            social_activity: big_five.extraversion,
            professionalism: big_five.conscientiousness,
        };
        let human_score = to_score(
            human_components.authenticity as f64 * w.human.attraction
                + human_components.social_activity as f64 * w.human.primary
                + human_components.professionalism as f64 * w.human.secondary,
        );

        let dominance_score = dominance_score(&big_five, handle.style, avatar.class);

        let score = CompositeScore {
            big_five,
            agent_score,
            human_score,
            dominance_score,
            handle_style: handle.style,
            avatar_class: avatar.class,
            agent_components,
            human_components,
        };

        tracing::debug!(
            extraversion = big_five.extraversion,
            openness = big_five.openness,
            conscientiousness = big_five.conscientiousness,
            agent_score,
            human_score,
            dominance_score,
            "computed composite score"
        );

        score
    }
}

fn attraction_score(attraction: u8) -> u8 {
    to_score(attraction as f64 * ATTRACTION_SCALE)
}

/// Additive dominance score: every band contributes independently.
pub fn dominance_score(big_five: &BigFive, style: HandleStyle, avatar: AvatarClass) -> u8 {
    let mut score = DOMINANCE_BASE;

    let e = big_five.extraversion;
    if e > DOMINANCE_EXTRAVERSION_STRONG {
        score += 20;
    } else if e > DOMINANCE_EXTRAVERSION_MILD {
        score += 10;
    } else if e < SUBMISSION_EXTRAVERSION_STRONG {
        score -= 20;
    } else if e < SUBMISSION_EXTRAVERSION_MILD {
        score -= 10;
    }

    if big_five.conscientiousness > HIGH_TRAIT {
        score += 15;
    } else if big_five.conscientiousness < LOW_TRAIT {
        score -= 10;
    }

    if big_five.openness > VERY_HIGH_OPENNESS {
        score += 5;
    }

    match style {
        HandleStyle::Professional | HandleStyle::RealName => score += 10,
        HandleStyle::Random => score -= 15,
        _ => {}
    }

    match avatar {
        AvatarClass::RealPhoto => score += 8,
        AvatarClass::DefaultCartoon => score -= 12,
        AvatarClass::Unknown => {}
    }

    score.clamp(0, SCORE_MAX as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::AvatarAnalyzer;
    use crate::bio::BioAnalyzer;
    use crate::handle::HandleAnalyzer;

    fn score(handle: &str, avatar: AvatarClass, bio: &str) -> CompositeScore {
        CompositeScorer::default().score(
            &HandleAnalyzer::new().analyze(handle),
            &AvatarAnalyzer::new().analyze(avatar),
            &BioAnalyzer::new().analyze(bio),
        )
    }

    #[test]
    fn test_real_name_with_photo() {
        let s = score("johnsmith", AvatarClass::RealPhoto, "");

        assert_eq!(s.big_five.extraversion, 66);
        assert_eq!(s.big_five.openness, 63);
        assert_eq!(s.big_five.conscientiousness, 62);
        assert_eq!(s.big_five.agreeableness, 50);
        assert_eq!(s.big_five.neuroticism, 50);
        assert_eq!(s.agent_score, 74);
        assert_eq!(s.human_score, 79);
        assert_eq!(s.dominance_score, 78);
        assert_eq!(s.dominance(), DominanceType::Dominant);
    }

    #[test]
    fn test_random_handle_with_cartoon() {
        let s = score("xK7qzpl", AvatarClass::DefaultCartoon, "");

        assert_eq!(s.handle_style, HandleStyle::Random);
        assert_eq!(s.big_five.extraversion, 27);
        assert_eq!(s.big_five.openness, 29);
        assert_eq!(s.dominance_score, 3);
        assert_eq!(s.dominance(), DominanceType::Submissive);
    }

    #[test]
    fn test_dominance_clamps_high() {
        let traits = BigFive::new(90, 90, 50, 90, 50);
        assert_eq!(
            dominance_score(&traits, HandleStyle::Professional, AvatarClass::RealPhoto),
            100
        );
    }

    #[test]
    fn test_dominance_clamps_low() {
        let traits = BigFive::new(10, 10, 50, 10, 50);
        // 50 - 20 - 10 - 15 - 12 = -7
        assert_eq!(
            dominance_score(&traits, HandleStyle::Random, AvatarClass::DefaultCartoon),
            0
        );
    }

    #[test]
    fn test_dominance_bands_are_additive() {
        // mild extraversion, high conscientiousness, very high openness
        let traits = BigFive::new(61, 81, 50, 76, 50);
        assert_eq!(
            dominance_score(&traits, HandleStyle::Unknown, AvatarClass::Unknown),
            50 + 10 + 15 + 5
        );

        // extraversion on the 75 boundary is only the mild band
        let traits = BigFive::new(75, 50, 50, 50, 50);
        assert_eq!(dominance_score(&traits, HandleStyle::Unknown, AvatarClass::Unknown), 60);

        // extraversion exactly 45 and 30
        let traits = BigFive::new(45, 50, 50, 50, 50);
        assert_eq!(dominance_score(&traits, HandleStyle::Unknown, AvatarClass::Unknown), 50);
        let traits = BigFive::new(30, 50, 50, 50, 50);
        assert_eq!(dominance_score(&traits, HandleStyle::Unknown, AvatarClass::Unknown), 40);
    }

    #[test]
    fn test_professionalism_feeds_agent_score() {
        let s = score("the_analyst", AvatarClass::Unknown, "");
        assert_eq!(s.agent_components.tech_affinity, 90);

        let s = score("hello_owl", AvatarClass::Unknown, "");
        assert_eq!(s.agent_components.tech_affinity, NEUTRAL);
    }

    #[test]
    fn test_bio_does_not_move_conscientiousness() {
        let quiet = score("johnsmith", AvatarClass::RealPhoto, "");
        let loud = score(
            "johnsmith",
            AvatarClass::RealPhoto,
            "Building things on the internet 🚀🎨🎮🎵🎬 and writing about it every single day, mostly late at night.",
        );

        assert_eq!(quiet.big_five.conscientiousness, loud.big_five.conscientiousness);
        assert_ne!(quiet.big_five.extraversion, loud.big_five.extraversion);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let handles = ["johnsmith", "mike42", "pixel_wizard", "the_analyst", "elf_queen", "xK7qzpl", "hello_owl"];
        let avatars = [AvatarClass::RealPhoto, AvatarClass::DefaultCartoon, AvatarClass::Unknown];
        let long = "long bio ".repeat(20);
        let bios = ["", "short", long.as_str()];

        for h in handles {
            for a in avatars {
                for b in bios {
                    let s = score(h, a, b);
                    let b = s.big_five;
                    for v in [b.openness, b.conscientiousness, b.extraversion, b.agreeableness, b.neuroticism] {
                        assert!(v <= 100);
                    }
                    assert!(s.agent_score <= 100);
                    assert!(s.human_score <= 100);
                    assert!(s.dominance_score <= 100);
                }
            }
        }
    }

    #[test]
    fn test_weights_validation() {
        assert!(CompositeWeights::default().validate().is_ok());

        let mut weights = CompositeWeights::default();
        weights.openness = SignalWeights::new(0.5, 0.5, 0.5);
        assert!(matches!(weights.validate(), Err(Error::Config(_))));
        assert!(CompositeScorer::new(weights).is_err());

        let mut weights = CompositeWeights::default();
        weights.extraversion = SignalWeights::new(1.2, -0.2, 0.0);
        assert!(weights.validate().is_err());
    }
}
