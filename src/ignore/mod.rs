//! Path exclusion for review configuration.
//!
//! Two filters gate a path before any instructions are resolved:
//! - `IgnoreFilter`: a path matching ANY ignore glob is excluded
//! - `IncludeFilter`: when non-empty, a path must match at least one include glob
//!
//! Both are disjunctions, so declaration order never changes the verdict.
//! Order is kept only so diagnostics can name the first pattern that matched.

use crate::error::ConfigError;
use crate::glob::{Pattern, normalize_path};
use globset::{GlobSet, GlobSetBuilder};

/// An ordered list of patterns compiled into a single `GlobSet`.
#[derive(Debug, Clone)]
struct PatternSet {
    patterns: Vec<Pattern>,
    set: GlobSet,
}

impl PatternSet {
    fn new(patterns: Vec<Pattern>, field: &str) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            builder.add(pattern.glob().clone());
        }

        let set = builder.build().map_err(|e| ConfigError::InvalidGlob {
            field: field.to_string(),
            pattern: patterns
                .iter()
                .map(Pattern::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            reason: e.kind().to_string(),
        })?;

        Ok(Self { patterns, set })
    }

    fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            set: GlobSet::empty(),
        }
    }

    fn is_match(&self, path: &str) -> bool {
        self.set.is_match(normalize_path(path))
    }

    fn first_match(&self, path: &str) -> Option<&Pattern> {
        self.set
            .matches(normalize_path(path))
            .into_iter()
            .min()
            .and_then(|index| self.patterns.get(index))
    }
}

/// Ignore globs: a path matching any of them is excluded from review.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    inner: PatternSet,
}

impl IgnoreFilter {
    /// Compile an ignore filter. `field` is used in error messages only.
    pub fn new(patterns: Vec<Pattern>, field: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: PatternSet::new(patterns, field)?,
        })
    }

    /// A filter that ignores nothing.
    pub fn empty() -> Self {
        Self {
            inner: PatternSet::empty(),
        }
    }

    /// Patterns in declaration order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.inner.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.inner.patterns.is_empty()
    }

    /// Whether `path` matches any ignore glob.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.inner.is_match(path)
    }

    /// The first declared pattern that matches `path`, if any.
    pub fn first_match(&self, path: &str) -> Option<&Pattern> {
        self.inner.first_match(path)
    }
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        Self::empty()
    }
}

/// Include globs: when any are declared, only matching paths are reviewed.
#[derive(Debug, Clone)]
pub struct IncludeFilter {
    inner: PatternSet,
}

impl IncludeFilter {
    /// Compile an include filter. `field` is used in error messages only.
    pub fn new(patterns: Vec<Pattern>, field: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: PatternSet::new(patterns, field)?,
        })
    }

    /// A filter that admits every path.
    pub fn empty() -> Self {
        Self {
            inner: PatternSet::empty(),
        }
    }

    /// Patterns in declaration order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.inner.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.inner.patterns.is_empty()
    }

    /// Whether `path` passes the filter. An empty filter admits everything.
    pub fn admits(&self, path: &str) -> bool {
        self.is_empty() || self.inner.is_match(path)
    }
}

impl Default for IncludeFilter {
    fn default() -> Self {
        Self::empty()
    }
}

/// Check whether `path` matches any of `patterns`.
///
/// The result is a disjunction and does not depend on pattern order.
pub fn is_ignored(path: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(path))
}
