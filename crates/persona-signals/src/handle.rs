//! Handle analysis: classify a handle's naming style and map it to partial
//! trait estimates.
//!
//! ## Rule Order
//!
//! | # | Style | Test |
//! |---|-------|------|
//! | 1 | `real_name` | ASCII letters only, at most 15 characters |
//! | 2 | `name_with_numbers` | ends in 2-4 digits |
//! | 3 | `creative_nickname` | creative keyword |
//! | 4 | `professional` | professional keyword |
//! | 5 | `roleplay` | fandom / honorific / fantasy keyword |
//! | 6 | `random` | no vowels, consonant runs or irregular case |
//! | 7 | `unknown` | fallback |
//!
//! The first rule that matches decides the style.

use std::sync::LazyLock;

use persona_core::thresholds::NEUTRAL;
use persona_core::{AgeIndicator, HandleStyle};
use regex::Regex;
use serde::{Deserialize, Serialize};

const REAL_NAME_MAX_CHARS: usize = 15;

pub const CREATIVE_KEYWORDS: &[&str] = &[
    "wizard", "ninja", "master", "guru", "dream", "pixel", "code", "dev", "design", "art",
    "creative", "magic", "legend", "pro", "epic", "tech", "cyber", "digital", "crypto", "web",
    "cloud",
];

pub const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "dr", "prof", "ceo", "cto", "engineer", "developer", "designer", "analyst", "consultant",
    "expert", "official", "lab", "research", "studio", "agency", "group", "team", "corp", "inc",
];

pub const ROLEPLAY_KEYWORDS: &[&str] = &[
    // honorifics
    "chan", "kun", "san", "sama", "senpai",
    // fantasy roles
    "knight", "warrior", "hunter", "mage", "elf", "dragon",
    // titles
    "captain", "lord", "king", "queen", "prince", "princess",
    // fandom
    "otaku", "weeb", "fan", "lover",
];

static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,}$").expect("valid regex"));
static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2,4}$").expect("valid regex"));
static VOWEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)[aeiou]").expect("valid regex"));
static CONSONANT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[bcdfghjklmnpqrstvwxyz]{4,}").expect("valid regex"));
static IRREGULAR_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][A-Z]|[A-Z]{2,}[a-z]").expect("valid regex"));

/// Handle text prepared once for every rule
struct HandleText<'a> {
    original: &'a str,
    lower: String,
}

impl HandleText<'_> {
    fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lower.contains(k))
    }
}

type StyleRule = (HandleStyle, fn(&HandleText<'_>) -> bool);

/// Ordered (style, predicate) pairs evaluated top to bottom
const STYLE_RULES: [StyleRule; 6] = [
    (HandleStyle::RealName, is_real_name),
    (HandleStyle::NameWithNumbers, has_trailing_digits),
    (HandleStyle::CreativeNickname, is_creative),
    (HandleStyle::Professional, is_professional),
    (HandleStyle::Roleplay, is_roleplay),
    (HandleStyle::Random, looks_random),
];

fn is_real_name(h: &HandleText<'_>) -> bool {
    LETTERS_ONLY.is_match(h.original) && h.original.chars().count() <= REAL_NAME_MAX_CHARS
}

fn has_trailing_digits(h: &HandleText<'_>) -> bool {
    TRAILING_DIGITS.is_match(h.original)
}

fn is_creative(h: &HandleText<'_>) -> bool {
    h.contains_any(CREATIVE_KEYWORDS)
}

fn is_professional(h: &HandleText<'_>) -> bool {
    h.contains_any(PROFESSIONAL_KEYWORDS)
}

fn is_roleplay(h: &HandleText<'_>) -> bool {
    h.contains_any(ROLEPLAY_KEYWORDS)
}

fn looks_random(h: &HandleText<'_>) -> bool {
    !VOWEL.is_match(h.original)
        || CONSONANT_RUN.is_match(h.original)
        || IRREGULAR_CASE.is_match(h.original)
}

/// Partial trait estimates derived from the handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleFeatures {
    pub style: HandleStyle,
    pub openness: u8,
    pub extraversion: u8,
    pub conscientiousness: u8,
    pub confidence: u8,
    /// Only professional handles carry this; the scorer falls back to neutral
    pub professionalism: Option<u8>,
    pub age_indicator: Option<AgeIndicator>,
    pub privacy_conscious: bool,
}

impl HandleFeatures {
    /// Trait profile attached to a naming style
    pub fn for_style(style: HandleStyle) -> Self {
        let neutral = Self {
            style,
            openness: NEUTRAL,
            extraversion: NEUTRAL,
            conscientiousness: NEUTRAL,
            confidence: NEUTRAL,
            professionalism: None,
            age_indicator: None,
            privacy_conscious: false,
        };

        match style {
            HandleStyle::RealName => Self {
                openness: 75,
                confidence: 85,
                conscientiousness: 70,
                ..neutral
            },
            HandleStyle::NameWithNumbers => Self {
                openness: 55,
                extraversion: 50,
                age_indicator: Some(AgeIndicator::Traditional),
                ..neutral
            },
            HandleStyle::CreativeNickname => Self {
                openness: 90,
                extraversion: 70,
                confidence: 80,
                ..neutral
            },
            HandleStyle::Professional => Self {
                conscientiousness: 85,
                openness: 65,
                professionalism: Some(90),
                ..neutral
            },
            HandleStyle::Roleplay => Self {
                openness: 95,
                extraversion: 60,
                age_indicator: Some(AgeIndicator::Young),
                ..neutral
            },
            HandleStyle::Random => Self {
                openness: 20,
                extraversion: 20,
                privacy_conscious: true,
                ..neutral
            },
            HandleStyle::Unknown => neutral,
        }
    }
}

/// Handle analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleAnalyzer;

impl HandleAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Classify a normalized handle (no leading `@`, trimmed)
    pub fn classify(&self, handle: &str) -> HandleStyle {
        let text = HandleText {
            original: handle,
            lower: handle.to_lowercase(),
        };

        STYLE_RULES
            .iter()
            .find(|(_, matches)| matches(&text))
            .map(|(style, _)| *style)
            .unwrap_or(HandleStyle::Unknown)
    }

    pub fn analyze(&self, handle: &str) -> HandleFeatures {
        let style = self.classify(handle);
        tracing::debug!(handle, style = style.as_str(), "classified handle");
        HandleFeatures::for_style(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(handle: &str) -> HandleStyle {
        HandleAnalyzer::new().classify(handle)
    }

    #[test]
    fn test_real_name() {
        assert_eq!(classify("johnsmith"), HandleStyle::RealName);
        assert_eq!(classify("JaneDoe"), HandleStyle::RealName);

        let features = HandleAnalyzer::new().analyze("johnsmith");
        assert_eq!(features.openness, 75);
        assert_eq!(features.confidence, 85);
        assert_eq!(features.conscientiousness, 70);
        assert_eq!(features.extraversion, 50);
    }

    #[test]
    fn test_real_name_length_bound() {
        // 16 letters is too long for a real name and falls through
        assert_ne!(classify("abcdefghijklmnop"), HandleStyle::RealName);
        assert_eq!(classify("abcdefghijklmno"), HandleStyle::RealName);
    }

    #[test]
    fn test_name_with_numbers() {
        assert_eq!(classify("john_1990"), HandleStyle::NameWithNumbers);
        assert_eq!(classify("mike42"), HandleStyle::NameWithNumbers);

        let features = HandleAnalyzer::new().analyze("mike42");
        assert_eq!(features.age_indicator, Some(AgeIndicator::Traditional));
        assert_eq!(features.openness, 55);
    }

    #[test]
    fn test_single_trailing_digit_is_not_name_with_numbers() {
        assert_ne!(classify("mike4"), HandleStyle::NameWithNumbers);
    }

    #[test]
    fn test_creative_beats_professional() {
        // "pixel" is creative, "studio" is professional; creative is checked first
        assert_eq!(classify("pixel_studio"), HandleStyle::CreativeNickname);
    }

    #[test]
    fn test_professional() {
        assert_eq!(classify("the_analyst"), HandleStyle::Professional);

        let features = HandleAnalyzer::new().analyze("the_analyst");
        assert_eq!(features.professionalism, Some(90));
        assert_eq!(features.conscientiousness, 85);
    }

    #[test]
    fn test_roleplay() {
        assert_eq!(classify("elf_queen"), HandleStyle::Roleplay);

        let features = HandleAnalyzer::new().analyze("elf_queen");
        assert_eq!(features.openness, 95);
        assert_eq!(features.age_indicator, Some(AgeIndicator::Young));
    }

    #[test]
    fn test_keywords_are_case_insensitive_substrings() {
        assert_eq!(classify("Cyber_Owl"), HandleStyle::CreativeNickname);
    }

    #[test]
    fn test_random() {
        assert_eq!(classify("xK7qzpl"), HandleStyle::Random);

        let features = HandleAnalyzer::new().analyze("xK7qzpl");
        assert_eq!(features.openness, 20);
        assert_eq!(features.extraversion, 20);
        assert!(features.privacy_conscious);
    }

    #[test]
    fn test_unknown_is_neutral() {
        assert_eq!(classify("hello_owl"), HandleStyle::Unknown);

        let features = HandleAnalyzer::new().analyze("hello_owl");
        assert_eq!(features, HandleFeatures::for_style(HandleStyle::Unknown));
        assert_eq!(features.openness, NEUTRAL);
        assert!(features.professionalism.is_none());
    }
}
