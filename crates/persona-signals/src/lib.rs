//! # Persona-Signals
//!
//! Feature extraction and scoring for the three profile signals.
//!
//! ## Signals
//!
//! 1. **Handle** - naming style (real name, nickname, professional, random...)
//! 2. **Avatar** - real photo vs generated placeholder
//! 3. **Bio** - length and emoji density
//!
//! Each analyzer yields a small feature record. The [`CompositeScorer`]
//! blends them into Big Five traits plus agent, human and dominance scores,
//! and [`categorize`] turns traits into 1-3 tags.
//!
//! Every function here is pure; identical inputs give identical outputs.

pub mod analyzer;
pub mod avatar;
pub mod bio;
pub mod categorizer;
pub mod handle;
pub mod scorer;

pub use analyzer::*;
pub use avatar::*;
pub use bio::*;
pub use categorizer::*;
pub use handle::*;
pub use scorer::*;
