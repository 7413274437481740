//! Review configuration model for revpath.
//!
//! This module defines the Config struct that represents a review
//! configuration document (conventionally `.coderabbit.yaml`). It supports
//! forward-compatible YAML parsing (unknown fields are ignored), defaults for
//! optional fields, and all-or-nothing validation of required fields, enums,
//! globs and regexes.

pub mod auto_review;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use auto_review::{AutoReview, BranchPattern, PullRequest};
pub use model::{
    AutoReviewDocument, Config, ConfigDocument, PathInstructionDocument, ReviewsDocument,
};
pub use types::{PathRule, ReviewProfile};
