//! Bio analysis: length and emoji density.

use std::ops::RangeInclusive;

use persona_core::thresholds::NEUTRAL;
use serde::{Deserialize, Serialize};

/// Code point ranges counted as emoji (pictographs, misc symbols, dingbats)
const EMOJI_RANGES: [RangeInclusive<u32>; 3] = [0x1F300..=0x1F9FF, 0x2600..=0x26FF, 0x2700..=0x27BF];

const LONG_BIO_UNITS: usize = 100;
const MEDIUM_BIO_UNITS: usize = 50;
const MANY_EMOJI: usize = 5;
const SOME_EMOJI: usize = 2;

/// Partial trait estimates derived from the bio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioFeatures {
    /// Length in UTF-16 code units, so astral-plane emoji count twice
    pub length: usize,
    pub emoji_count: usize,
    pub openness: u8,
    pub extraversion: u8,
    pub detail_oriented: bool,
}

pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|r| r.contains(&cp))
}

pub fn count_emoji(text: &str) -> usize {
    text.chars().filter(|c| is_emoji(*c)).count()
}

/// Bio analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct BioAnalyzer;

impl BioAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, bio: &str) -> BioFeatures {
        if bio.is_empty() {
            return BioFeatures {
                length: 0,
                emoji_count: 0,
                openness: 30,
                extraversion: 30,
                detail_oriented: false,
            };
        }

        let length = bio.encode_utf16().count();
        let emoji_count = count_emoji(bio);

        let (openness, mut extraversion, detail_oriented) = if length > LONG_BIO_UNITS {
            (80, 70, true)
        } else if length > MEDIUM_BIO_UNITS {
            (65, 60, false)
        } else {
            (NEUTRAL, NEUTRAL, false)
        };

        // Emoji density outranks length for extraversion
        if emoji_count >= MANY_EMOJI {
            extraversion = 85;
        } else if emoji_count >= SOME_EMOJI {
            extraversion = 65;
        }

        BioFeatures {
            length,
            emoji_count,
            openness,
            extraversion,
            detail_oriented,
        }
    }
}
