//! Engine facade: raw signals in, complete profile result out.

use persona_core::{
    AgeIndicator, AvatarClass, BigFive, DominanceType, HandleStyle, RawSignals, Result,
};
use persona_signals::{
    AgentComponents, CompositeWeights, HumanComponents, ProfileAnalyzer, SignalAnalysis, Tag,
};
use serde::{Deserialize, Serialize};

use crate::commentary::NarrativeCategory;
use crate::report::ExtendedReport;
use crate::synthesizer::NarrativeSynthesizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Attach the long-form report to every result
    pub extended_report: bool,
    /// Fixed seed for the commentary generator
    pub seed: Option<u64>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            extended_report: true,
            seed: None,
        }
    }
}

/// Intermediate signal facts kept alongside the headline numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub handle_style: HandleStyle,
    pub avatar_class: AvatarClass,
    pub bio_length: usize,
    pub emoji_count: usize,
    pub privacy_conscious: bool,
    pub detail_oriented: bool,
    pub age_indicator: Option<AgeIndicator>,
    pub agent_components: AgentComponents,
    pub human_components: HumanComponents,
}

/// Final output for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResult {
    pub handle: String,
    pub big_five: BigFive,
    pub agent_score: u8,
    pub human_score: u8,
    pub dominance_score: u8,
    pub dominance_type: DominanceType,
    pub tags: Vec<Tag>,
    pub narrative_category: NarrativeCategory,
    pub short_narrative: String,
    pub extended_report: Option<ExtendedReport>,
    pub details: ProfileDetails,
}

#[derive(Debug)]
pub struct PersonaEngine {
    analyzer: ProfileAnalyzer,
    synthesizer: NarrativeSynthesizer,
    extended_report: bool,
}

impl PersonaEngine {
    pub fn new(weights: CompositeWeights, options: EngineOptions) -> Result<Self> {
        let synthesizer = match options.seed {
            Some(seed) => NarrativeSynthesizer::with_seed(seed),
            None => NarrativeSynthesizer::new(),
        };

        Ok(Self {
            analyzer: ProfileAnalyzer::new(weights)?,
            synthesizer,
            extended_report: options.extended_report,
        })
    }

    /// Engine with a fixed commentary seed and default weights
    pub fn seeded(seed: u64) -> Self {
        Self {
            analyzer: ProfileAnalyzer::default(),
            synthesizer: NarrativeSynthesizer::with_seed(seed),
            extended_report: true,
        }
    }

    pub fn evaluate(&self, signals: &RawSignals) -> ProfileResult {
        let SignalAnalysis {
            handle,
            avatar: _,
            bio,
            score,
            tags,
        } = self.analyzer.analyze(signals);

        let commentary = self.synthesizer.commentary(&score);
        let extended_report = self
            .extended_report
            .then(|| self.synthesizer.extended_report(&score));

        ProfileResult {
            handle: signals.handle().to_string(),
            big_five: score.big_five,
            agent_score: score.agent_score,
            human_score: score.human_score,
            dominance_score: score.dominance_score,
            dominance_type: score.dominance(),
            tags,
            narrative_category: commentary.category,
            short_narrative: commentary.text,
            extended_report,
            details: ProfileDetails {
                handle_style: handle.style,
                avatar_class: score.avatar_class,
                bio_length: bio.length,
                emoji_count: bio.emoji_count,
                privacy_conscious: handle.privacy_conscious,
                detail_oriented: bio.detail_oriented,
                age_indicator: handle.age_indicator,
                agent_components: score.agent_components,
                human_components: score.human_components,
            },
        }
    }

    /// Validate the raw triple, then evaluate it
    pub fn evaluate_raw(&self, handle: &str, avatar: AvatarClass, bio: &str) -> Result<ProfileResult> {
        let signals = RawSignals::new(handle, avatar, bio)?;
        Ok(self.evaluate(&signals))
    }
}

impl Default for PersonaEngine {
    fn default() -> Self {
        Self {
            analyzer: ProfileAnalyzer::default(),
            synthesizer: NarrativeSynthesizer::default(),
            extended_report: true,
        }
    }
}
