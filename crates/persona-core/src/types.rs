//! Fundamental input types for profile analysis.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Avatar classification supplied by the avatar-lookup collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarClass {
    /// A real photo the owner chose to show
    RealPhoto,
    /// A generated placeholder (e.g. identicon or cartoon)
    DefaultCartoon,
    #[default]
    Unknown,
}

impl AvatarClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarClass::RealPhoto => "real_photo",
            AvatarClass::DefaultCartoon => "default_cartoon",
            AvatarClass::Unknown => "unknown",
        }
    }
}

/// Naming style a handle falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleStyle {
    RealName,
    NameWithNumbers,
    CreativeNickname,
    Professional,
    Roleplay,
    Random,
    #[default]
    Unknown,
}

impl HandleStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandleStyle::RealName => "real_name",
            HandleStyle::NameWithNumbers => "name_with_numbers",
            HandleStyle::CreativeNickname => "creative_nickname",
            HandleStyle::Professional => "professional",
            HandleStyle::Roleplay => "roleplay",
            HandleStyle::Random => "random",
            HandleStyle::Unknown => "unknown",
        }
    }
}

/// Rough age hint some handle styles carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeIndicator {
    /// Name plus birth-year style digits
    Traditional,
    /// Fandom and role-play vocabulary
    Young,
}

/// Strip leading `@`s and surrounding whitespace from a handle
pub fn normalize_handle(raw: &str) -> &str {
    raw.trim().trim_start_matches('@').trim()
}

/// The three raw signals of one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSignals {
    handle: String,
    avatar_class: AvatarClass,
    bio: String,
}

impl RawSignals {
    /// Build signals from collaborator input.
    ///
    /// The handle is normalized; an empty result is the only rejected input.
    pub fn new(handle: &str, avatar_class: AvatarClass, bio: impl Into<String>) -> Result<Self> {
        let handle = normalize_handle(handle);
        if handle.is_empty() {
            return Err(Error::MalformedInput("handle is required".to_string()));
        }

        Ok(Self {
            handle: handle.to_string(),
            avatar_class,
            bio: bio.into(),
        })
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn avatar_class(&self) -> AvatarClass {
        self.avatar_class
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }
}
