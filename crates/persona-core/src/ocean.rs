//! Big Five (OCEAN) trait scores and the dominance (S/M/Switch) scale.

use serde::{Deserialize, Serialize};

use crate::thresholds::{DOMINANT_ABOVE, NEUTRAL, SCORE_MAX, SUBMISSIVE_BELOW};

/// Clamp and round a raw estimate onto the integer 0..=100 scale.
pub fn to_score(value: f64) -> u8 {
    if value.is_nan() {
        return NEUTRAL;
    }
    value.round().clamp(0.0, SCORE_MAX as f64) as u8
}

/// Big Five trait scores.
/// Each trait is an integer on a scale of 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BigFive {
    /// Sociability, assertiveness, visible self-presentation
    pub extraversion: u8,

    /// Creativity, curiosity, appetite for novelty
    pub openness: u8,

    /// Cooperation and warmth
    pub agreeableness: u8,

    /// Organization, self-discipline, professionalism
    pub conscientiousness: u8,

    /// Emotional reactivity. No signal estimates it yet.
    pub neuroticism: u8,
}

impl BigFive {
    pub fn new(
        extraversion: u8,
        openness: u8,
        agreeableness: u8,
        conscientiousness: u8,
        neuroticism: u8,
    ) -> Self {
        Self {
            extraversion: extraversion.min(SCORE_MAX),
            openness: openness.min(SCORE_MAX),
            agreeableness: agreeableness.min(SCORE_MAX),
            conscientiousness: conscientiousness.min(SCORE_MAX),
            neuroticism: neuroticism.min(SCORE_MAX),
        }
    }

    pub fn neutral() -> Self {
        Self::new(NEUTRAL, NEUTRAL, NEUTRAL, NEUTRAL, NEUTRAL)
    }
}

impl Default for BigFive {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Position on the dominance scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DominanceType {
    /// Leads, sets the pace, enjoys control
    #[serde(rename = "S")]
    Dominant,
    /// Follows, enjoys being guided
    #[serde(rename = "M")]
    Submissive,
    /// Moves between both depending on partner and context
    Switch,
}

impl DominanceType {
    pub fn from_score(score: u8) -> Self {
        if score > DOMINANT_ABOVE {
            DominanceType::Dominant
        } else if score < SUBMISSIVE_BELOW {
            DominanceType::Submissive
        } else {
            DominanceType::Switch
        }
    }

    /// Short label used in results ("S", "M", "Switch")
    pub fn label(&self) -> &'static str {
        match self {
            DominanceType::Dominant => "S",
            DominanceType::Submissive => "M",
            DominanceType::Switch => "Switch",
        }
    }

    /// The position a partner would ideally take opposite this one
    pub fn complement(&self) -> DominanceType {
        match self {
            DominanceType::Dominant => DominanceType::Submissive,
            DominanceType::Submissive => DominanceType::Dominant,
            DominanceType::Switch => DominanceType::Switch,
        }
    }
}
