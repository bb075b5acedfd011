//! # Persona-Core
//!
//! Core types and utilities for inferring personality traits from the weak
//! signals a social-media profile exposes: its handle, its avatar and its bio.

pub mod error;
pub mod ocean;
pub mod thresholds;
pub mod types;

pub use error::{Error, Result};
pub use ocean::*;
pub use types::*;
