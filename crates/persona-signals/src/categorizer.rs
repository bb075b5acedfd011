//! Tag assignment from composite trait thresholds.

use persona_core::thresholds::{HIGH_TRAIT, LOW_TRAIT, MAX_TAGS};
use persona_core::BigFive;
use serde::{Deserialize, Serialize};

/// Tag vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "Social Butterfly")]
    SocialButterfly,
    Outgoing,
    Introspective,
    Reserved,
    Creative,
    #[serde(rename = "AI Enthusiast")]
    AiEnthusiast,
    #[serde(rename = "Tech Savvy")]
    TechSavvy,
    Friendly,
    #[serde(rename = "Warm-hearted")]
    WarmHearted,
    Professional,
    Organized,
    Curious,
    Balanced,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::SocialButterfly => "Social Butterfly",
            Tag::Outgoing => "Outgoing",
            Tag::Introspective => "Introspective",
            Tag::Reserved => "Reserved",
            Tag::Creative => "Creative",
            Tag::AiEnthusiast => "AI Enthusiast",
            Tag::TechSavvy => "Tech Savvy",
            Tag::Friendly => "Friendly",
            Tag::WarmHearted => "Warm-hearted",
            Tag::Professional => "Professional",
            Tag::Organized => "Organized",
            Tag::Curious => "Curious",
            Tag::Balanced => "Balanced",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type TagRule = (fn(&BigFive) -> bool, &'static [Tag]);

/// Evaluated in order; every matching rule contributes its tags
const TAG_RULES: [TagRule; 5] = [
    (|b| b.extraversion > HIGH_TRAIT, &[Tag::SocialButterfly, Tag::Outgoing]),
    (|b| b.extraversion < LOW_TRAIT, &[Tag::Introspective, Tag::Reserved]),
    (|b| b.openness > HIGH_TRAIT, &[Tag::Creative, Tag::AiEnthusiast, Tag::TechSavvy]),
    (|b| b.agreeableness > HIGH_TRAIT, &[Tag::Friendly, Tag::WarmHearted]),
    (|b| b.conscientiousness > HIGH_TRAIT, &[Tag::Professional, Tag::Organized]),
];

const FALLBACK_TAGS: [Tag; 2] = [Tag::Curious, Tag::Balanced];

/// Collect tags for a trait vector: 1 to 3 tags, first matched first kept
pub fn categorize(big_five: &BigFive) -> Vec<Tag> {
    let mut tags: Vec<Tag> = TAG_RULES
        .iter()
        .filter(|(matches, _)| matches(big_five))
        .flat_map(|(_, tags)| tags.iter().copied())
        .collect();

    if tags.is_empty() {
        tags.extend(FALLBACK_TAGS);
    }

    tags.truncate(MAX_TAGS);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_pair() {
        let tags = categorize(&BigFive::neutral());
        assert_eq!(tags, vec![Tag::Curious, Tag::Balanced]);
    }

    #[test]
    fn test_truncation_keeps_evaluation_order() {
        let tags = categorize(&BigFive::new(90, 90, 90, 90, 50));
        assert_eq!(tags, vec![Tag::SocialButterfly, Tag::Outgoing, Tag::Creative]);
    }

    #[test]
    fn test_introvert_with_high_openness() {
        let tags = categorize(&BigFive::new(20, 80, 50, 50, 50));
        assert_eq!(tags, vec![Tag::Introspective, Tag::Reserved, Tag::Creative]);
    }

    #[test]
    fn test_openness_alone_gives_three() {
        let tags = categorize(&BigFive::new(60, 76, 50, 50, 50));
        assert_eq!(tags, vec![Tag::Creative, Tag::AiEnthusiast, Tag::TechSavvy]);
    }

    #[test]
    fn test_boundaries_are_strict() {
        // 75 is not high and 40 is not low
        let tags = categorize(&BigFive::new(75, 75, 75, 75, 50));
        assert_eq!(tags, vec![Tag::Curious, Tag::Balanced]);
        let tags = categorize(&BigFive::new(40, 50, 50, 50, 50));
        assert_eq!(tags, vec![Tag::Curious, Tag::Balanced]);
    }

    #[test]
    fn test_tag_count_bounds() {
        for e in (0..=100).step_by(5) {
            for o in (0..=100).step_by(5) {
                for c in (0..=100).step_by(5) {
                    let tags = categorize(&BigFive::new(e, o, 50, c, 50));
                    assert!((1..=MAX_TAGS).contains(&tags.len()));
                }
            }
        }
    }

    #[test]
    fn test_tag_serializes_as_display_text() {
        let json = serde_json::to_string(&vec![Tag::AiEnthusiast, Tag::WarmHearted]).unwrap();
        assert_eq!(json, r#"["AI Enthusiast","Warm-hearted"]"#);
        assert_eq!(Tag::TechSavvy.to_string(), "Tech Savvy");
    }
}
