//! Deterministic analysis pipeline: raw signals to features, scores and tags.

use persona_core::{RawSignals, Result};
use serde::{Deserialize, Serialize};

use crate::avatar::{AvatarAnalyzer, AvatarFeatures};
use crate::bio::{BioAnalyzer, BioFeatures};
use crate::categorizer::{categorize, Tag};
use crate::handle::{HandleAnalyzer, HandleFeatures};
use crate::scorer::{CompositeScore, CompositeScorer, CompositeWeights};

/// Everything the deterministic half of the engine derives from one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalAnalysis {
    pub handle: HandleFeatures,
    pub avatar: AvatarFeatures,
    pub bio: BioFeatures,
    pub score: CompositeScore,
    pub tags: Vec<Tag>,
}

/// Complete signal analyzer
#[derive(Debug, Clone, Default)]
pub struct ProfileAnalyzer {
    handle: HandleAnalyzer,
    avatar: AvatarAnalyzer,
    bio: BioAnalyzer,
    scorer: CompositeScorer,
}

impl ProfileAnalyzer {
    pub fn new(weights: CompositeWeights) -> Result<Self> {
        Ok(Self {
            scorer: CompositeScorer::new(weights)?,
            ..Self::default()
        })
    }

    pub fn analyze(&self, signals: &RawSignals) -> SignalAnalysis {
        let handle = self.handle.analyze(signals.handle());
        let avatar = self.avatar.analyze(signals.avatar_class());
        let bio = self.bio.analyze(signals.bio());

        let score = self.scorer.score(&handle, &avatar, &bio);
        let tags = categorize(&score.big_five);

        SignalAnalysis {
            handle,
            avatar,
            bio,
            score,
            tags,
        }
    }
}
