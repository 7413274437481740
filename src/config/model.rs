//! Config struct and the serde document it is loaded from.

use super::auto_review::AutoReview;
use super::types::*;
use crate::ignore::{IgnoreFilter, IncludeFilter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A loaded review configuration.
///
/// Built once by [`Config::from_yaml`] or [`Config::load`] and never mutated
/// afterwards; share it by reference. Every glob inside has already been
/// validated, so matching cannot fail.
#[derive(Debug, Clone)]
pub struct Config {
    /// Locale tag for review output (e.g. "en-US").
    pub language: String,

    /// Opt into the consuming service's early-access features.
    pub early_access: bool,

    /// Free-text instructions applied to every reviewed path.
    pub custom_instructions: Option<String>,

    pub review_profile: ReviewProfile,

    /// Whether the reviewer should request changes (rather than comment).
    pub request_changes_workflow: bool,

    pub auto_review: AutoReview,

    /// Path rules in declaration order.
    pub path_instructions: Vec<PathRule>,

    /// `reviews.ignore_patterns` followed by the `!`-prefixed `path_filters`.
    pub ignore_patterns: IgnoreFilter,

    /// Unprefixed `path_filters`; empty means every path is included.
    pub include_patterns: IncludeFilter,
}

// =========================================================================
// Document model
// =========================================================================
// These mirror the YAML layout. Every field is optional here so the loader
// can tell a missing field apart from a malformed one and report it by name.

/// Top level of the review configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    pub early_access: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<ReviewsDocument>,

    /// Unknown fields, accepted for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// The `reviews` block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    pub request_changes_workflow: bool,

    pub auto_review: AutoReviewDocument,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_instructions: Vec<PathInstructionDocument>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_patterns: Vec<String>,

    /// CodeRabbit-style filters: `!glob` excludes, `glob` includes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_filters: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// The `reviews.auto_review` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoReviewDocument {
    #[serde(default = "default_true")]
    pub enabled: bool,

    pub drafts: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub base_branches: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_title_keywords: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for AutoReviewDocument {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            drafts: false,
            base_branches: Vec::new(),
            ignore_title_keywords: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

/// One entry of `reviews.path_instructions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathInstructionDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}
