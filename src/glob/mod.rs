//! Glob matching for repository paths.
//!
//! Patterns are compiled with globset using these rules:
//! - `**` matches zero or more whole path segments, separators included
//! - `*` and `?` never cross a `/`
//! - `[...]` character classes and `{a,b}` alternation are supported
//!
//! Paths are repo-relative and normalized to forward slashes before matching.

use crate::error::ConfigError;
use globset::{Glob, GlobBuilder, GlobMatcher};
use std::fmt;

/// A validated glob pattern together with its compiled matcher.
///
/// A `Pattern` can only be obtained through [`Pattern::new`], so holding one
/// proves the source text is a syntactically valid glob.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    matcher: GlobMatcher,
}

impl Pattern {
    /// Compile a glob pattern.
    ///
    /// `field` names where the pattern came from (e.g.
    /// `reviews.path_instructions[0].path`) and only appears in the error.
    pub fn new(pattern: &str, field: &str) -> Result<Self, ConfigError> {
        let glob = build_glob(pattern).map_err(|reason| ConfigError::InvalidGlob {
            field: field.to_string(),
            pattern: pattern.to_string(),
            reason,
        })?;

        Ok(Self {
            source: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    /// The pattern text as written in the document.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled glob, for adding to a `GlobSet`.
    pub fn glob(&self) -> &Glob {
        self.matcher.glob()
    }

    /// Check whether a path matches this pattern.
    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(normalize_path(path))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Check whether `path` matches the glob `pattern`.
///
/// Malformed patterns never match. Callers that need to reject them should
/// compile with [`Pattern::new`] up front.
///
/// # Examples
///
/// ```
/// use revpath::glob::matches;
///
/// assert!(matches("**/Models/**/*.swift", "App/Models/User.swift"));
/// assert!(!matches("**/Models/**/*.swift", "App/ViewModels/UserVM.swift"));
/// ```
pub fn matches(pattern: &str, path: &str) -> bool {
    match build_glob(pattern) {
        Ok(glob) => glob.compile_matcher().is_match(normalize_path(path)),
        Err(_) => false,
    }
}

/// Check that `pattern` is a syntactically valid glob, returning the reason
/// when it is not.
pub fn validate_glob(pattern: &str) -> std::result::Result<(), String> {
    build_glob(pattern).map(|_| ())
}

/// Normalize a file path for matching.
///
/// Converts backslashes to forward slashes and strips any leading `./`,
/// so Windows-style and dot-prefixed paths match the same globs.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    while let Some(rest) = normalized.strip_prefix("./") {
        normalized = rest.to_string();
    }
    normalized
}

fn build_glob(pattern: &str) -> std::result::Result<Glob, String> {
    if pattern.trim().is_empty() {
        return Err("pattern is empty".to_string());
    }

    GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|e| e.kind().to_string())
}
