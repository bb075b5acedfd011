//! Partner preferences and the condensed ideal-partner portrait.

use std::fmt;

use persona_core::thresholds::{HIGH_TRAIT, LOW_TRAIT, MAX_PARTNER_KEYWORDS, REPORT_HIGH_TRAIT};
use persona_core::{AvatarClass, BigFive, DominanceType};
use serde::{Deserialize, Serialize};

use crate::intimacy::Band;
use crate::report::ReportSection;

/// What kind of partner the profile is drawn to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatePreference {
    pub age: ReportSection,
    pub temperament: ReportSection,
    /// Present only for clearly extraverted or introverted profiles
    pub social: Option<ReportSection>,
    pub appearance: ReportSection,
    pub build: ReportSection,
    pub aura: ReportSection,
    pub style: ReportSection,
}

impl MatePreference {
    pub fn build(big_five: &BigFive, dominance: DominanceType, avatar: AvatarClass) -> Self {
        Self {
            age: age_preference(big_five),
            temperament: temperament_preference(dominance),
            social: social_preference(big_five.extraversion),
            appearance: appearance_preference(big_five, avatar),
            build: build_preference(dominance),
            aura: aura_preference(big_five),
            style: style_preference(big_five),
        }
    }

    pub fn sections(&self) -> Vec<&ReportSection> {
        let mut sections = vec![&self.age, &self.temperament];
        if let Some(social) = &self.social {
            sections.push(social);
        }
        sections.extend([&self.appearance, &self.build, &self.aura, &self.style]);
        sections
    }
}

fn age_preference(b: &BigFive) -> ReportSection {
    if b.openness > HIGH_TRAIT && b.extraversion > REPORT_HIGH_TRAIT {
        ReportSection::new(
            "Age",
            "Wide span, open-minded",
            &[
                "Range: ten years either way or more",
                "Numbers matter less than a meeting of minds",
                "Drawn to both mature and youthful partners",
                "Attraction: depth, life experience, fresh energy",
            ],
        )
    } else if b.conscientiousness > REPORT_HIGH_TRAIT {
        ReportSection::new(
            "Age",
            "Same age or slightly older, values stability",
            &[
                "Range: three to five years",
                "Leans toward steady, mature partners",
                "Pays attention to standing and financial footing",
                "Attraction: maturity, reliability, a plan",
            ],
        )
    } else if b.extraversion > HIGH_TRAIT {
        ReportSection::new(
            "Age",
            "Same age or younger, energetic",
            &[
                "Range: same age or up to five years younger",
                "Likes lively, playful partners",
                "Values shared topics and a social fit",
                "Attraction: youth, energy, humour",
            ],
        )
    } else {
        ReportSection::new(
            "Age",
            "Flexible, age is not a deciding factor",
            &[
                "Range: fairly wide, around seven years",
                "Age is a reference point, not a filter",
                "Personality fit and shared values come first",
            ],
        )
    }
}

fn temperament_preference(dominance: DominanceType) -> ReportSection {
    match dominance {
        DominanceType::Dominant => ReportSection::new(
            "Temperament",
            "Complementary: gentle, yielding, easy to guide",
            &[
                "Ideal type: sweet, dependent, a little shy",
                "Likes: deference, admiration, trust, willingness to be led",
                "Dislikes: partners who fight for control",
                "Keywords: petite, gentle, obedient, cute",
            ],
        ),
        DominanceType::Submissive => ReportSection::new(
            "Temperament",
            "Complementary: strong, in charge, protective",
            &[
                "Ideal type: commanding, in control, protective",
                "Likes: confidence, decisiveness, leadership, security",
                "Dislikes: passivity and indecision",
                "Keywords: boss energy, regal, strong, dependable",
            ],
        ),
        DominanceType::Switch => ReportSection::new(
            "Temperament",
            "Varied: flexible, many-sided, layered",
            &[
                "Ideal type: firm or soft as needed, full of contrasts",
                "Likes: variety, mystery, adaptability, fun",
                "Dislikes: rigid partners at either extreme",
                "Keywords: contrast, many sides, change, balance",
            ],
        ),
    }
}

fn social_preference(extraversion: u8) -> Option<ReportSection> {
    match Band::of(extraversion, HIGH_TRAIT, LOW_TRAIT) {
        Band::High => Some(ReportSection::new(
            "Social Fit",
            "Outgoing, sociable partners",
            &[
                "Wants a partner who joins in on social plans",
                "Enjoys being the centre of attention together",
            ],
        )),
        Band::Low => Some(ReportSection::new(
            "Social Fit",
            "Quiet partners who talk deeply",
            &[
                "Prefers time for two over noisy gatherings",
                "Wants a partner who respects the need for quiet",
            ],
        )),
        Band::Middle => None,
    }
}

fn appearance_preference(b: &BigFive, avatar: AvatarClass) -> ReportSection {
    if avatar == AvatarClass::RealPhoto && b.openness > REPORT_HIGH_TRAIT {
        ReportSection::new(
            "Appearance",
            "Distinctive over conventional",
            &[
                "Values a striking presence and personal style",
                "Likes memorable, artistic looks",
                "May favour niche aesthetics",
            ],
        )
    } else if b.conscientiousness > REPORT_HIGH_TRAIT {
        ReportSection::new(
            "Appearance",
            "Polished, mainstream standards",
            &[
                "Values a neat, well-presented look",
                "Likes refined grooming",
                "May favour an elegant or business look",
            ],
        )
    } else {
        ReportSection::new(
            "Appearance",
            "Natural and comfortable",
            &[
                "Values a clean, easy-going look",
                "No need for heavy styling",
                "May favour a fresh, approachable look",
            ],
        )
    }
}

fn build_preference(dominance: DominanceType) -> ReportSection {
    match dominance {
        DominanceType::Dominant => ReportSection::new(
            "Build",
            "Slender and soft",
            &["Likes petite, delicate figures", "Keywords: petite, slim, soft"],
        ),
        DominanceType::Submissive => ReportSection::new(
            "Build",
            "Strong and solid",
            &[
                "Likes athletic, muscular figures",
                "Wants to feel strength and safety",
                "Keywords: strong, muscular, powerful",
            ],
        ),
        DominanceType::Switch => ReportSection::new(
            "Build",
            "Balanced and healthy",
            &[
                "Values health and good proportions",
                "Avoids extremes",
                "Keywords: balanced, healthy, natural",
            ],
        ),
    }
}

fn aura_preference(b: &BigFive) -> ReportSection {
    if b.openness > HIGH_TRAIT {
        ReportSection::new(
            "Aura",
            "Artistic, independent, mysterious",
            &[
                "Likes people with character and a story",
                "Attraction: unique, deep, substantial",
            ],
        )
    } else if b.extraversion > HIGH_TRAIT {
        ReportSection::new(
            "Aura",
            "Sunny, energetic, cheerful",
            &[
                "Likes a bright smile and an upbeat attitude",
                "Attraction: positivity, warmth, charisma",
            ],
        )
    } else {
        ReportSection::new(
            "Aura",
            "Gentle, thoughtful, composed",
            &[
                "Likes cultivated, well-read people",
                "Attraction: grace, wisdom, steadiness",
            ],
        )
    }
}

fn style_preference(b: &BigFive) -> ReportSection {
    if b.openness > HIGH_TRAIT {
        ReportSection::new(
            "Dress Style",
            "Trend-driven and individual",
            &["Likes designed, fashionable outfits", "May favour streetwear, dark or vintage looks"],
        )
    } else if b.conscientiousness > REPORT_HIGH_TRAIT {
        ReportSection::new(
            "Dress Style",
            "Refined and elegant",
            &["Likes carefully chosen outfits", "May favour understated luxury or business wear"],
        )
    } else {
        ReportSection::new(
            "Dress Style",
            "Casual and comfortable",
            &["Likes simple, comfortable clothes", "May favour casual, sporty or minimal looks"],
        )
    }
}

/// Condensed portrait of the ideal partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealPartner {
    pub age: String,
    pub temperament: String,
    pub appearance: String,
    pub aura: String,
    /// Orientations that pair well with this profile, best first
    pub dominance_match: Vec<DominanceType>,
    pub keywords: Vec<String>,
}

impl IdealPartner {
    pub fn build(big_five: &BigFive, dominance: DominanceType) -> Self {
        let b = big_five;

        let age = if b.conscientiousness > REPORT_HIGH_TRAIT {
            "Same age or slightly older, mature and steady"
        } else if b.extraversion > HIGH_TRAIT {
            "Same age or younger, full of energy"
        } else {
            "Any age, whoever clicks"
        };

        let temperament = match dominance {
            DominanceType::Dominant => "Gentle, yielding, sweet, dependent",
            DominanceType::Submissive => "Strong, confident, opinionated, protective",
            DominanceType::Switch => "Flexible, layered, firm or soft as needed",
        };

        let appearance = if b.openness > HIGH_TRAIT {
            "Distinctive, individual, artistic"
        } else if b.conscientiousness > REPORT_HIGH_TRAIT {
            "Polished, mainstream, well presented"
        } else {
            "Natural, clean, approachable"
        };

        let aura = if b.extraversion > HIGH_TRAIT {
            "Sunny, lively, quick to smile"
        } else if b.openness > HIGH_TRAIT {
            "Mysterious, independent, artistic depth"
        } else {
            "Gentle, thoughtful, calm and cultivated"
        };

        Self {
            age: age.to_string(),
            temperament: temperament.to_string(),
            appearance: appearance.to_string(),
            aura: aura.to_string(),
            dominance_match: dominance_match(dominance),
            keywords: partner_keywords(big_five, dominance),
        }
    }
}

/// Complementary orientations, best match first. Fixed poles pair with
/// their opposite, then Switch; Switch pairs with anyone.
pub fn dominance_match(dominance: DominanceType) -> Vec<DominanceType> {
    let best = dominance.complement();
    if best == DominanceType::Switch {
        vec![best, DominanceType::Dominant, DominanceType::Submissive]
    } else {
        vec![best, DominanceType::Switch]
    }
}

/// Ordered keyword list: dominance first, then openness, extraversion and
/// conscientiousness, capped at [`MAX_PARTNER_KEYWORDS`]
pub fn partner_keywords(big_five: &BigFive, dominance: DominanceType) -> Vec<String> {
    let mut keywords: Vec<&str> = match dominance {
        DominanceType::Dominant => vec!["sweet", "obedient", "cute", "gentle"],
        DominanceType::Submissive => vec!["strong", "commanding", "dependable", "protective"],
        DominanceType::Switch => vec!["contrast", "many-sided", "layered"],
    };

    if big_five.openness > HIGH_TRAIT {
        keywords.extend(["unique", "artistic", "mysterious"]);
    }

    match Band::of(big_five.extraversion, HIGH_TRAIT, LOW_TRAIT) {
        Band::High => keywords.extend(["sunny", "energetic", "cheerful"]),
        Band::Low => keywords.extend(["quiet", "deep", "reserved"]),
        Band::Middle => {}
    }

    if big_five.conscientiousness > REPORT_HIGH_TRAIT {
        keywords.extend(["mature", "steady", "refined"]);
    }

    keywords.truncate(MAX_PARTNER_KEYWORDS);
    keywords.into_iter().map(String::from).collect()
}

impl fmt::Display for IdealPartner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matches: Vec<&str> = self.dominance_match.iter().map(|d| d.label()).collect();

        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Temperament: {}", self.temperament)?;
        writeln!(f, "Appearance: {}", self.appearance)?;
        writeln!(f, "Aura: {}", self.aura)?;
        writeln!(f, "Match: {}", matches.join(" / "))?;
        writeln!(f, "Keywords: {}", self.keywords.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_order_and_cap() {
        // Dominant (4) + openness (3) + extraversion (3) would be 10
        let scores = BigFive::new(85, 90, 50, 80, 50);
        let keywords = partner_keywords(&scores, DominanceType::Dominant);

        assert_eq!(keywords.len(), MAX_PARTNER_KEYWORDS);
        assert_eq!(
            keywords,
            vec!["sweet", "obedient", "cute", "gentle", "unique", "artistic", "mysterious", "sunny"]
        );
    }

    #[test]
    fn test_keywords_switch_neutral() {
        let keywords = partner_keywords(&BigFive::neutral(), DominanceType::Switch);
        assert_eq!(keywords, vec!["contrast", "many-sided", "layered"]);
    }

    #[test]
    fn test_keywords_introvert_and_conscientious() {
        let scores = BigFive::new(30, 50, 50, 71, 50);
        let keywords = partner_keywords(&scores, DominanceType::Submissive);
        assert_eq!(
            keywords,
            vec![
                "strong", "commanding", "dependable", "protective", "quiet", "deep", "reserved",
                "mature"
            ]
        );
    }

    #[test]
    fn test_dominance_match() {
        assert_eq!(
            dominance_match(DominanceType::Dominant),
            vec![DominanceType::Submissive, DominanceType::Switch]
        );
        assert_eq!(
            dominance_match(DominanceType::Submissive),
            vec![DominanceType::Dominant, DominanceType::Switch]
        );
        assert_eq!(
            dominance_match(DominanceType::Switch),
            vec![
                DominanceType::Switch,
                DominanceType::Dominant,
                DominanceType::Submissive
            ]
        );

        for d in [DominanceType::Dominant, DominanceType::Submissive, DominanceType::Switch] {
            assert_eq!(dominance_match(d)[0], d.complement());
        }
    }

    #[test]
    fn test_age_preference_order() {
        // open + outgoing wins over conscientiousness
        let wide = BigFive::new(71, 76, 50, 90, 50);
        assert_eq!(age_preference(&wide).label, "Wide span, open-minded");

        // extraversion 71 is not above 75, so conscientiousness decides
        let steady = BigFive::new(71, 50, 50, 90, 50);
        assert!(age_preference(&steady).label.starts_with("Same age or slightly older"));

        let flexible = BigFive::neutral();
        assert!(age_preference(&flexible).label.starts_with("Flexible"));
    }

    #[test]
    fn test_social_dimension_only_at_extremes() {
        assert!(social_preference(50).is_none());
        assert!(social_preference(75).is_none());
        assert!(social_preference(76).is_some());
        assert!(social_preference(39).is_some());
    }

    #[test]
    fn test_appearance_needs_real_photo() {
        let scores = BigFive::new(50, 72, 50, 50, 50);
        assert_eq!(
            appearance_preference(&scores, AvatarClass::RealPhoto).label,
            "Distinctive over conventional"
        );
        assert_eq!(
            appearance_preference(&scores, AvatarClass::Unknown).label,
            "Natural and comfortable"
        );
    }

    #[test]
    fn test_mate_preference_sections() {
        let neutral = MatePreference::build(
            &BigFive::neutral(),
            DominanceType::Switch,
            AvatarClass::Unknown,
        );
        assert_eq!(neutral.sections().len(), 6);

        let outgoing = MatePreference::build(
            &BigFive::new(80, 50, 50, 50, 50),
            DominanceType::Dominant,
            AvatarClass::RealPhoto,
        );
        assert_eq!(outgoing.sections().len(), 7);
        assert_eq!(outgoing.build.label, "Slender and soft");
        assert_eq!(outgoing.aura.label, "Sunny, energetic, cheerful");
    }

    #[test]
    fn test_ideal_partner_rendering() {
        let partner = IdealPartner::build(&BigFive::neutral(), DominanceType::Dominant);
        let text = partner.to_string();

        assert!(text.contains("Match: M / Switch"));
        assert!(text.contains("Keywords: sweet, obedient, cute, gentle"));
        assert_eq!(partner.age, "Any age, whoever clicks");
    }
}
