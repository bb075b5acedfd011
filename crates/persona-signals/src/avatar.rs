//! Avatar analysis: a fixed lookup from avatar class to trait estimates and
//! attraction sub-scores.

use persona_core::thresholds::NEUTRAL;
use persona_core::AvatarClass;
use serde::{Deserialize, Serialize};

/// Partial trait estimates derived from the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarFeatures {
    pub class: AvatarClass,
    pub extraversion: u8,
    pub openness: u8,
    pub agreeableness: u8,
    pub conscientiousness: u8,
    /// Appeal to agents, 1..=5
    pub agent_attraction: u8,
    /// Appeal to people, 1..=5
    pub human_attraction: u8,
}

/// Avatar analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct AvatarAnalyzer;

impl AvatarAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, class: AvatarClass) -> AvatarFeatures {
        let (extraversion, openness, attraction) = match class {
            AvatarClass::RealPhoto => (90, 80, 5),
            AvatarClass::DefaultCartoon => (30, 40, 2),
            AvatarClass::Unknown => (NEUTRAL, NEUTRAL, 3),
        };

        AvatarFeatures {
            class,
            extraversion,
            openness,
            agreeableness: NEUTRAL,
            conscientiousness: NEUTRAL,
            agent_attraction: attraction,
            human_attraction: attraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_photo() {
        let features = AvatarAnalyzer::new().analyze(AvatarClass::RealPhoto);
        assert_eq!(features.extraversion, 90);
        assert_eq!(features.openness, 80);
        assert_eq!(features.agent_attraction, 5);
        assert_eq!(features.human_attraction, 5);
    }

    #[test]
    fn test_default_cartoon() {
        let features = AvatarAnalyzer::new().analyze(AvatarClass::DefaultCartoon);
        assert_eq!(features.extraversion, 30);
        assert_eq!(features.openness, 40);
        assert_eq!(features.agent_attraction, 2);
    }

    #[test]
    fn test_unknown_is_midpoint() {
        let features = AvatarAnalyzer::new().analyze(AvatarClass::Unknown);
        assert_eq!(features.extraversion, NEUTRAL);
        assert_eq!(features.agent_attraction, 3);
        assert_eq!(features.human_attraction, 3);
    }

    #[test]
    fn test_agreeableness_and_conscientiousness_stay_neutral() {
        for class in [AvatarClass::RealPhoto, AvatarClass::DefaultCartoon, AvatarClass::Unknown] {
            let features = AvatarAnalyzer::new().analyze(class);
            assert_eq!(features.agreeableness, NEUTRAL);
            assert_eq!(features.conscientiousness, NEUTRAL);
        }
    }
}
