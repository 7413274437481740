//! Auto-review gating for pull requests.
//!
//! Decides whether a pull request should be reviewed automatically:
//! - disabled auto review never triggers
//! - drafts are skipped unless `drafts` is set
//! - a title containing any ignore keyword (case-insensitive) is skipped
//! - the base branch must be the default branch or fully match a `base_branches` regex

use crate::error::ConfigError;
use regex::Regex;

/// A `base_branches` entry: the regex as written plus its anchored form.
#[derive(Debug, Clone)]
pub struct BranchPattern {
    source: String,
    regex: Regex,
}

impl BranchPattern {
    pub fn new(pattern: &str, field: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            ConfigError::InvalidRegex {
                field: field.to_string(),
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, branch: &str) -> bool {
        self.regex.is_match(branch)
    }
}

/// Auto-review settings from `reviews.auto_review`.
#[derive(Debug, Clone)]
pub struct AutoReview {
    pub enabled: bool,
    pub drafts: bool,
    pub base_branches: Vec<BranchPattern>,
    pub ignore_title_keywords: Vec<String>,
}

impl Default for AutoReview {
    fn default() -> Self {
        Self {
            enabled: true,
            drafts: false,
            base_branches: Vec::new(),
            ignore_title_keywords: Vec::new(),
        }
    }
}

/// The pull request facts auto review decisions are based on.
#[derive(Debug, Clone, Default)]
pub struct PullRequest {
    pub title: String,
    pub is_draft: bool,
    pub base_branch: String,
    pub default_branch: String,
}

impl AutoReview {
    /// Whether `pr` should be reviewed automatically.
    pub fn should_review(&self, pr: &PullRequest) -> bool {
        if !self.enabled {
            return false;
        }

        if pr.is_draft && !self.drafts {
            return false;
        }

        if self.title_is_ignored(&pr.title) {
            return false;
        }

        pr.base_branch == pr.default_branch
            || self
                .base_branches
                .iter()
                .any(|pattern| pattern.is_match(&pr.base_branch))
    }

    fn title_is_ignored(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.ignore_title_keywords
            .iter()
            .filter(|keyword| !keyword.is_empty())
            .any(|keyword| title.contains(&keyword.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pr(title: &str, is_draft: bool, base: &str) -> PullRequest {
        PullRequest {
            title: title.to_string(),
            is_draft,
            base_branch: base.to_string(),
            default_branch: "main".to_string(),
        }
    }

    #[test]
    fn test_default_reviews_non_draft_prs_to_default_branch() {
        let auto = AutoReview::default();

        assert!(auto.should_review(&pr("Add login", false, "main")));
        assert!(!auto.should_review(&pr("Add login", true, "main")));
        assert!(!auto.should_review(&pr("Add login", false, "develop")));
    }

    #[test]
    fn test_disabled_never_reviews() {
        let auto = AutoReview {
            enabled: false,
            ..Default::default()
        };
        assert!(!auto.should_review(&pr("Add login", false, "main")));
    }

    #[test]
    fn test_drafts_reviewed_when_enabled() {
        let auto = AutoReview {
            drafts: true,
            ..Default::default()
        };
        assert!(auto.should_review(&pr("Add login", true, "main")));
    }

    #[test]
    fn test_ignore_title_keywords_case_insensitive() {
        let auto = AutoReview {
            ignore_title_keywords: vec!["WIP".to_string(), "do not review".to_string()],
            ..Default::default()
        };

        assert!(!auto.should_review(&pr("wip: half done", false, "main")));
        assert!(!auto.should_review(&pr("Refactor (DO NOT REVIEW)", false, "main")));
        // Plain substring match, not word match.
        assert!(!auto.should_review(&pr("Wipe cache on logout", false, "main")));
        assert!(auto.should_review(&pr("Fix crash", false, "main")));
    }

    #[test]
    fn test_empty_keyword_is_ignored() {
        let auto = AutoReview {
            ignore_title_keywords: vec![String::new()],
            ..Default::default()
        };
        assert!(auto.should_review(&pr("Fix crash", false, "main")));
    }

    #[test]
    fn test_base_branch_patterns_full_match() {
        let auto = AutoReview {
            base_branches: vec![BranchPattern::new("release/.*", "base_branches[0]").unwrap()],
            ..Default::default()
        };

        assert!(auto.should_review(&pr("Bump", false, "release/1.2")));
        assert!(!auto.should_review(&pr("Bump", false, "hotfix/release/1.2")));
        assert!(!auto.should_review(&pr("Bump", false, "develop")));
    }

    #[test]
    fn test_invalid_branch_regex() {
        let err = BranchPattern::new("release/(", "reviews.auto_review.base_branches[0]")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegex { .. }));
    }

    #[test]
    fn test_branch_pattern_keeps_source() {
        let pattern = BranchPattern::new("release/.*", "f").unwrap();
        assert_eq!(pattern.as_str(), "release/.*");
    }
}
