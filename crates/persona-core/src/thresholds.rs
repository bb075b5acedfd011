//! Decision boundaries shared by the scorer, the categorizer and the
//! narrative synthesizer.
//!
//! Every comparison against these values is strict (`>` / `<`), so a score
//! sitting exactly on a boundary belongs to the middle band.

/// Neutral trait estimate used whenever a signal says nothing.
pub const NEUTRAL: u8 = 50;

/// Upper bound of every trait and composite score.
pub const SCORE_MAX: u8 = 100;

/// A trait above this is "high" for tags, categories and report bands.
pub const HIGH_TRAIT: u8 = 75;

/// A trait below this is "low" for tags and report bands.
pub const LOW_TRAIT: u8 = 40;

/// Openness above this selects the `high_openness` commentary and adds a
/// small dominance bonus.
pub const VERY_HIGH_OPENNESS: u8 = 80;

/// Softer "high" boundary used by the pacing and partner-preference bands.
pub const REPORT_HIGH_TRAIT: u8 = 70;

/// Dominance scores above this classify as S.
pub const DOMINANT_ABOVE: u8 = 65;

/// Dominance scores below this classify as M.
pub const SUBMISSIVE_BELOW: u8 = 35;

/// Starting point of the additive dominance score.
pub const DOMINANCE_BASE: i32 = 50;

/// Extraversion bands feeding the dominance score.
pub const DOMINANCE_EXTRAVERSION_STRONG: u8 = 75;
pub const DOMINANCE_EXTRAVERSION_MILD: u8 = 60;
pub const SUBMISSION_EXTRAVERSION_STRONG: u8 = 30;
pub const SUBMISSION_EXTRAVERSION_MILD: u8 = 45;

/// Tags attached to a single result.
pub const MAX_TAGS: usize = 3;

/// Keywords listed in the ideal-partner summary.
pub const MAX_PARTNER_KEYWORDS: usize = 8;

/// Scale factor turning a 1..=5 attraction sub-score into 0..=100.
pub const ATTRACTION_SCALE: f64 = 20.0;
