//! Configuration types for revpath.
//!
//! This module defines the review profile enum and the path rule type
//! used by the Config struct.

use crate::glob::Pattern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How strict the external reviewer should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewProfile {
    /// Lighter feedback, fewer nitpicks (default).
    #[default]
    Chill,
    /// More thorough feedback, including style nitpicks.
    Assertive,
}

impl ReviewProfile {
    /// All accepted spellings, in display order.
    pub const VARIANTS: &'static [&'static str] = &["chill", "assertive"];

    /// Parse a review profile from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "chill" => Some(Self::Chill),
            "assertive" => Some(Self::Assertive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewProfile::Chill => "chill",
            ReviewProfile::Assertive => "assertive",
        }
    }
}

impl fmt::Display for ReviewProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A glob pattern paired with the instruction text it contributes.
///
/// The instruction text is opaque: it is never parsed, only checked to be
/// non-blank when the document is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRule {
    pub pattern: Pattern,
    pub instructions: String,
}

impl PathRule {
    pub fn new(pattern: Pattern, instructions: impl Into<String>) -> Self {
        Self {
            pattern,
            instructions: instructions.into(),
        }
    }

    /// Whether this rule applies to `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

// Default value functions for serde
pub(crate) fn default_true() -> bool {
    true
}
