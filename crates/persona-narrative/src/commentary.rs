//! Commentary category selection and template choice.
//!
//! Categories are checked in order and the first match wins:
//!
//! | # | Category | Test |
//! |---|----------|------|
//! | 1 | `high_extraversion` | extraversion > 75 |
//! | 2 | `high_openness` | openness > 80 |
//! | 3 | `mysterious` | default cartoon avatar or random handle |
//! | 4 | `balanced` | fallback |

use std::fmt;

use persona_core::thresholds::{HIGH_TRAIT, VERY_HIGH_OPENNESS};
use persona_core::{AvatarClass, BigFive, HandleStyle};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::templates::{self, CommentaryPool, COMMENTARY_POOL_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeCategory {
    HighExtraversion,
    HighOpenness,
    Mysterious,
    Balanced,
}

/// What the category rules look at
#[derive(Debug, Clone, Copy)]
pub struct CategoryInput {
    pub big_five: BigFive,
    pub avatar_class: AvatarClass,
    pub handle_style: HandleStyle,
}

type CategoryRule = (NarrativeCategory, fn(&CategoryInput) -> bool);

const CATEGORY_RULES: [CategoryRule; 3] = [
    (NarrativeCategory::HighExtraversion, |i| {
        i.big_five.extraversion > HIGH_TRAIT
    }),
    (NarrativeCategory::HighOpenness, |i| {
        i.big_five.openness > VERY_HIGH_OPENNESS
    }),
    (NarrativeCategory::Mysterious, |i| {
        i.avatar_class == AvatarClass::DefaultCartoon || i.handle_style == HandleStyle::Random
    }),
];

impl NarrativeCategory {
    pub const ALL: [NarrativeCategory; 4] = [
        NarrativeCategory::HighExtraversion,
        NarrativeCategory::HighOpenness,
        NarrativeCategory::Mysterious,
        NarrativeCategory::Balanced,
    ];

    pub fn select(input: &CategoryInput) -> Self {
        CATEGORY_RULES
            .iter()
            .find(|(_, matches)| matches(input))
            .map(|(category, _)| *category)
            .unwrap_or(NarrativeCategory::Balanced)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NarrativeCategory::HighExtraversion => "high_extraversion",
            NarrativeCategory::HighOpenness => "high_openness",
            NarrativeCategory::Mysterious => "mysterious",
            NarrativeCategory::Balanced => "balanced",
        }
    }

    pub fn templates(&self) -> &'static CommentaryPool {
        match self {
            NarrativeCategory::HighExtraversion => &templates::HIGH_EXTRAVERSION,
            NarrativeCategory::HighOpenness => &templates::HIGH_OPENNESS,
            NarrativeCategory::Mysterious => &templates::MYSTERIOUS,
            NarrativeCategory::Balanced => &templates::BALANCED,
        }
    }

    /// Pick one template uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.templates()[rng.gen_range(0..COMMENTARY_POOL_SIZE)]
    }
}

impl fmt::Display for NarrativeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
