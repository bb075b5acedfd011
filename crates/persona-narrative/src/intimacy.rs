//! Intimacy-style report: dominance orientation plus four expression
//! dimensions read off the Big Five scores and the avatar.

use persona_core::thresholds::{HIGH_TRAIT, LOW_TRAIT, NEUTRAL, REPORT_HIGH_TRAIT, SCORE_MAX};
use persona_core::{AvatarClass, BigFive, DominanceType};
use serde::{Deserialize, Serialize};

use crate::report::ReportSection;

/// Where a trait falls relative to a pair of strict cut-offs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Band {
    High,
    Middle,
    Low,
}

impl Band {
    pub(crate) fn of(value: u8, above: u8, below: u8) -> Self {
        if value > above {
            Band::High
        } else if value < below {
            Band::Low
        } else {
            Band::Middle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntimacyReport {
    pub dominance_type: DominanceType,
    pub dominance: ReportSection,
    pub expression: ReportSection,
    pub visual_sensitivity: ReportSection,
    pub pacing: ReportSection,
    pub novelty: ReportSection,
}

impl IntimacyReport {
    pub fn build(big_five: &BigFive, dominance_score: u8, avatar: AvatarClass) -> Self {
        let dominance_type = DominanceType::from_score(dominance_score);

        Self {
            dominance_type,
            dominance: dominance_section(dominance_type, dominance_score),
            expression: expression_section(big_five.extraversion),
            visual_sensitivity: visual_section(avatar),
            pacing: pacing_section(big_five.conscientiousness),
            novelty: novelty_section(big_five.openness),
        }
    }

    /// Sections in reading order
    pub fn sections(&self) -> [&ReportSection; 5] {
        [
            &self.dominance,
            &self.expression,
            &self.visual_sensitivity,
            &self.pacing,
            &self.novelty,
        ]
    }
}

/// The figure shown for each orientation.
///
/// Dominant profiles show the score itself, submissive ones its complement,
/// and switches their distance from the midpoint (lower is more balanced).
pub fn dominance_index(dominance_type: DominanceType, score: u8) -> (u8, u8) {
    let score = score.min(SCORE_MAX);
    match dominance_type {
        DominanceType::Dominant => (score, SCORE_MAX),
        DominanceType::Submissive => (SCORE_MAX - score, SCORE_MAX),
        DominanceType::Switch => (score.abs_diff(NEUTRAL), NEUTRAL),
    }
}

fn dominance_section(dominance_type: DominanceType, score: u8) -> ReportSection {
    let (index, scale) = dominance_index(dominance_type, score);

    match dominance_type {
        DominanceType::Dominant => ReportSection::new(
            "Dominance",
            "S (Dominant)",
            &[
                "Mindset: likes to run the situation and enjoys leading",
                "Behaviour: initiates, sets the rules and the rhythm",
                "Tension: shows up as assertive words and actions, enjoys a partner who yields",
                "Power: looks for control and the leading position in a relationship",
                "Role play: Teacher/Student, Boss/Subordinate, Dom/Sub",
            ],
        )
        .with_detail(format!("Dominance index: {index}/{scale}")),
        DominanceType::Submissive => ReportSection::new(
            "Dominance",
            "M (Submissive)",
            &[
                "Mindset: enjoys being guided and looked after, finds satisfaction in yielding",
                "Behaviour: responds rather than initiates, happy to let the other lead",
                "Tension: shows up as eagerness to please, enjoys being won over",
                "Power: looks for the security of being protected and directed",
                "Role play: Student/Teacher, Pet/Owner, Sub/Dom",
            ],
        )
        .with_detail(format!("Submission index: {index}/{scale}")),
        DominanceType::Switch => ReportSection::new(
            "Dominance",
            "Switch",
            &[
                "Mindset: can lead or follow, switches with the partner and the moment",
                "Behaviour: reads what the other needs and adapts the role",
                "Tension: varied, can be firm or gentle, many layers",
                "Power: enjoys trading roles, never locked into one mode",
                "Role play: varied, adjusted to the partner",
            ],
        )
        .with_detail(format!("Balance index: {index}/{scale} (lower is more balanced)")),
    }
}

fn expression_section(extraversion: u8) -> ReportSection {
    match Band::of(extraversion, HIGH_TRAIT, LOW_TRAIT) {
        Band::High => ReportSection::new(
            "Expression Style",
            "Direct and outspoken",
            &[
                "Says what they want with words and body language",
                "Does not hide needs, builds the tension actively",
                "Likely enjoys flirting, hints and teasing conversation",
            ],
        ),
        Band::Low => ReportSection::new(
            "Expression Style",
            "Subtle and reserved",
            &[
                "Sends signals through looks and small gestures",
                "Prefers hints to statements, enjoys ambiguity",
                "Needs the other side to notice and answer the hints",
            ],
        ),
        Band::Middle => ReportSection::new(
            "Expression Style",
            "Moderate",
            &[
                "Can be direct or subtle depending on the situation",
                "More forward with people they know well",
                "Good sense of timing and measure",
            ],
        ),
    }
}

fn visual_section(avatar: AvatarClass) -> ReportSection {
    match avatar {
        AvatarClass::RealPhoto => ReportSection::new(
            "Visual Sensitivity",
            "High: cares about visual impression",
            &[
                "Shows a real face, confident about appearance",
                "Visual elements weigh heavily, looks matter",
                "Likely responds to outfits and atmosphere",
            ],
        ),
        AvatarClass::DefaultCartoon | AvatarClass::Unknown => ReportSection::new(
            "Visual Sensitivity",
            "Low to medium: mind over looks",
            &[
                "Does not put appearance forward, values what is inside",
                "Tension comes from conversation, mood and psychology",
                "Visual appeal is a bonus rather than a requirement",
            ],
        ),
    }
}

fn pacing_section(conscientiousness: u8) -> ReportSection {
    match Band::of(conscientiousness, REPORT_HIGH_TRAIT, LOW_TRAIT) {
        Band::High => ReportSection::new(
            "Pacing",
            "Gradual",
            &[
                "Likes to warm up step by step, dislikes rushing",
                "Values ritual and the process itself",
                "Needs time to build trust and comfort",
            ],
        ),
        Band::Low => ReportSection::new(
            "Pacing",
            "Spontaneous",
            &[
                "Enjoys spontaneous moments of passion",
                "Warms up quickly without much build-up",
                "Likes novelty and surprises",
            ],
        ),
        Band::Middle => ReportSection::new(
            "Pacing",
            "Adaptive",
            &[
                "Fast or slow depending on the situation and the partner",
                "Enjoys a slow build but does not mind a quick pace",
                "Values being in sync with the partner",
            ],
        ),
    }
}

fn novelty_section(openness: u8) -> ReportSection {
    match Band::of(openness, HIGH_TRAIT, LOW_TRAIT) {
        Band::High => ReportSection::new(
            "Novelty",
            "Very high: eager to experiment",
            &[
                "Very open to new ideas and role play",
                "Willing to explore unconventional settings",
                "May be into cosplay, scenarios and props",
                "Enjoys breaking routine and testing boundaries",
            ],
        ),
        Band::Low => ReportSection::new(
            "Novelty",
            "Conservative: prefers the familiar",
            &[
                "Prefers traditional, familiar ways",
                "May need time to warm up to new ideas",
                "Values comfort and safety",
            ],
        ),
        Band::Middle => ReportSection::new(
            "Novelty",
            "Moderate: explores at a measured pace",
            &[
                "Tries new things on familiar ground",
                "Extends boundaries step by step",
                "Willing to experiment without going to extremes",
            ],
        ),
    }
}
