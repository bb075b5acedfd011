//! AI analysis path: prompt construction and response parsing.
//!
//! The model is asked for a fenced JSON block; everything outside the fence
//! is ignored. Scores outside 0..=100 are rejected rather than clamped, since
//! they mean the model ignored the requested format.

use persona_core::thresholds::SCORE_MAX;
use persona_core::{BigFive, DominanceType};
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// Tags kept from a model response
pub const MAX_AI_TAGS: usize = 5;

const PROMPT_TEMPLATE: &str = r#"You are an experienced personality analyst who studies social-media users.

Analyse the following profile:

- Handle: {{HANDLE}}
- Avatar URL: {{AVATAR_URL}}
- Bio: {{BIO}}

1. Handle: judge the naming style (real name, nickname, creative, professional, random) and what it says about confidence, openness and sociability.
2. Avatar: judge the picture type (real photo, cartoon, anime, artwork, default) and what it conveys.
3. Bio (if any): judge tone, emoji use and interests.

Reply with a single ```json fenced block in this shape:

{
  "bigFive": {
    "extraversion": 0-100,
    "openness": 0-100,
    "agreeableness": 0-100,
    "conscientiousness": 0-100,
    "neuroticism": 0-100
  },
  "dominanceScore": 0-100,
  "tags": ["tag1", "tag2", "tag3"],
  "analysis": {
    "handleStyle": "...",
    "avatarInsight": "...",
    "personalityOverview": "...",
    "intimacyStyle": "..."
  }
}

Infer cautiously from limited information, stay neutral, and prefer conservative estimates when information is missing."#;

/// Fill the analysis prompt for one profile
pub fn build_prompt(handle: &str, avatar_url: Option<&str>, bio: &str) -> String {
    let bio = if bio.trim().is_empty() { "(none)" } else { bio };

    PROMPT_TEMPLATE
        .replace("{{HANDLE}}", handle)
        .replace("{{AVATAR_URL}}", avatar_url.unwrap_or("(unknown)"))
        .replace("{{BIO}}", bio)
}

/// Free-text commentary returned next to the scores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiNarrative {
    pub handle_style: String,
    pub avatar_insight: String,
    pub personality_overview: String,
    pub intimacy_style: String,
}

/// Validated model output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub big_five: BigFive,
    pub dominance_score: u8,
    pub dominance_type: DominanceType,
    pub tags: Vec<String>,
    pub narrative: Option<AiNarrative>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBigFive {
    extraversion: i64,
    openness: i64,
    agreeableness: i64,
    conscientiousness: i64,
    neuroticism: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResponse {
    big_five: RawBigFive,
    dominance_score: i64,
    #[serde(default)]
    tags: Vec<String>,
    analysis: Option<AiNarrative>,
}

/// Contents of the first ```json (or bare ```) fence, or the whole text
pub fn extract_json_block(text: &str) -> &str {
    for opener in ["```json", "```"] {
        if let Some(start) = text.find(opener) {
            let body = &text[start + opener.len()..];
            if let Some(end) = body.find("```") {
                return body[..end].trim();
            }
        }
    }
    text.trim()
}

fn score(name: &str, value: i64) -> ServiceResult<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= SCORE_MAX)
        .ok_or_else(|| ServiceError::Ai(format!("{name} out of range: {value}")))
}

/// Parse and validate a model completion
pub fn parse_ai_response(text: &str) -> ServiceResult<AiAnalysis> {
    let raw: RawResponse = serde_json::from_str(extract_json_block(text))
        .map_err(|e| ServiceError::Ai(format!("unparseable response: {e}")))?;

    let b = &raw.big_five;
    let big_five = BigFive::new(
        score("extraversion", b.extraversion)?,
        score("openness", b.openness)?,
        score("agreeableness", b.agreeableness)?,
        score("conscientiousness", b.conscientiousness)?,
        score("neuroticism", b.neuroticism)?,
    );
    let dominance_score = score("dominanceScore", raw.dominance_score)?;

    let mut tags: Vec<String> = raw
        .tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    tags.truncate(MAX_AI_TAGS);

    Ok(AiAnalysis {
        big_five,
        dominance_score,
        dominance_type: DominanceType::from_score(dominance_score),
        tags,
        narrative: raw.analysis,
    })
}
