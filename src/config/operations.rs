//! Config loading, validation, and serialization.

use super::auto_review::{AutoReview, BranchPattern};
use super::model::*;
use super::types::{PathRule, ReviewProfile};
use crate::error::ConfigError;
use crate::glob::Pattern;
use crate::ignore::{IgnoreFilter, IncludeFilter};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the review configuration document
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ConfigError::Read)` - The file could not be read
    /// * `Err(ConfigError::*)` - Any other load failure from [`Config::from_yaml`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading review config");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Loading is all-or-nothing: the first invalid field fails the whole
    /// document. Unknown fields are ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)
            .map_err(|e| ConfigError::MalformedDocument(e.to_string()))?;

        let value = match value {
            // An empty document parses as null; treat it as an empty mapping so
            // the missing required fields are reported by name.
            serde_yaml::Value::Null => serde_yaml::Value::Mapping(Default::default()),
            serde_yaml::Value::Mapping(_) => value,
            _ => {
                return Err(ConfigError::MalformedDocument(
                    "top level must be a mapping".to_string(),
                ));
            }
        };

        let document: ConfigDocument = serde_yaml::from_value(value)
            .map_err(|e| ConfigError::MalformedDocument(e.to_string()))?;

        Self::from_document(document)
    }

    /// Validate a parsed document and compile it into a Config.
    ///
    /// Validation order:
    /// - `language` present and non-blank
    /// - `reviews` present
    /// - `reviews.profile` is a known profile
    /// - each path rule has a valid glob and non-blank instructions
    /// - ignore patterns, then path filters, are valid globs
    /// - `auto_review.base_branches` entries are valid regexes
    pub fn from_document(document: ConfigDocument) -> Result<Self, ConfigError> {
        log_unknown_fields("", &document.extra);

        let language = document
            .language
            .filter(|language| !language.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingRequiredField("language".to_string()))?;

        let reviews = document
            .reviews
            .ok_or_else(|| ConfigError::MissingRequiredField("reviews".to_string()))?;
        log_unknown_fields("reviews.", &reviews.extra);
        log_unknown_fields("reviews.auto_review.", &reviews.auto_review.extra);

        let review_profile = match reviews.profile.as_deref() {
            None => ReviewProfile::default(),
            Some(profile) => {
                ReviewProfile::from_str(profile).ok_or_else(|| ConfigError::InvalidEnum {
                    field: "reviews.profile".to_string(),
                    value: profile.to_string(),
                    expected: ReviewProfile::VARIANTS.join(", "),
                })?
            }
        };

        let path_instructions = compile_path_rules(reviews.path_instructions)?;

        let mut ignore = Vec::new();
        for (i, pattern) in reviews.ignore_patterns.iter().enumerate() {
            ignore.push(Pattern::new(
                pattern,
                &format!("reviews.ignore_patterns[{}]", i),
            )?);
        }

        let mut include = Vec::new();
        for (i, filter) in reviews.path_filters.iter().enumerate() {
            let field = format!("reviews.path_filters[{}]", i);
            match filter.strip_prefix('!') {
                Some(excluded) => ignore.push(Pattern::new(excluded, &field)?),
                None => include.push(Pattern::new(filter, &field)?),
            }
        }

        let mut base_branches = Vec::new();
        for (i, branch) in reviews.auto_review.base_branches.iter().enumerate() {
            base_branches.push(BranchPattern::new(
                branch,
                &format!("reviews.auto_review.base_branches[{}]", i),
            )?);
        }

        let config = Config {
            language,
            early_access: document.early_access,
            custom_instructions: document.custom_instructions,
            review_profile,
            request_changes_workflow: reviews.request_changes_workflow,
            auto_review: AutoReview {
                enabled: reviews.auto_review.enabled,
                drafts: reviews.auto_review.drafts,
                base_branches,
                ignore_title_keywords: reviews.auto_review.ignore_title_keywords,
            },
            path_instructions,
            ignore_patterns: IgnoreFilter::new(ignore, "reviews.ignore_patterns")?,
            include_patterns: IncludeFilter::new(include, "reviews.path_filters")?,
        };

        debug!(
            rules = config.path_instructions.len(),
            ignore_patterns = config.ignore_patterns.patterns().len(),
            include_patterns = config.include_patterns.patterns().len(),
            profile = %config.review_profile,
            "review config loaded"
        );

        Ok(config)
    }

    /// Convert back into the document model.
    ///
    /// The result is normalized: all exclusions are written under
    /// `ignore_patterns` and all inclusions under `path_filters`.
    pub fn to_document(&self) -> ConfigDocument {
        ConfigDocument {
            language: Some(self.language.clone()),
            early_access: self.early_access,
            custom_instructions: self.custom_instructions.clone(),
            reviews: Some(ReviewsDocument {
                profile: Some(self.review_profile.as_str().to_string()),
                request_changes_workflow: self.request_changes_workflow,
                auto_review: AutoReviewDocument {
                    enabled: self.auto_review.enabled,
                    drafts: self.auto_review.drafts,
                    base_branches: self
                        .auto_review
                        .base_branches
                        .iter()
                        .map(|b| b.as_str().to_string())
                        .collect(),
                    ignore_title_keywords: self.auto_review.ignore_title_keywords.clone(),
                    extra: BTreeMap::new(),
                },
                path_instructions: self
                    .path_instructions
                    .iter()
                    .map(|rule| PathInstructionDocument {
                        path: Some(rule.pattern.as_str().to_string()),
                        instructions: Some(rule.instructions.clone()),
                    })
                    .collect(),
                ignore_patterns: pattern_strings(self.ignore_patterns.patterns()),
                path_filters: pattern_strings(self.include_patterns.patterns()),
                extra: BTreeMap::new(),
            }),
            extra: BTreeMap::new(),
        }
    }

    /// Serialize the normalized config to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(&self.to_document())
            .map_err(|e| ConfigError::MalformedDocument(format!("failed to serialize YAML: {}", e)))
    }

    /// Serialize the normalized config to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(&self.to_document())
            .map_err(|e| ConfigError::MalformedDocument(format!("failed to serialize JSON: {}", e)))
    }
}

fn compile_path_rules(entries: Vec<PathInstructionDocument>) -> Result<Vec<PathRule>, ConfigError> {
    let mut rules = Vec::with_capacity(entries.len());

    for (i, entry) in entries.into_iter().enumerate() {
        let path_field = format!("reviews.path_instructions[{}].path", i);
        let path = entry
            .path
            .ok_or_else(|| ConfigError::MissingRequiredField(path_field.clone()))?;
        let pattern = Pattern::new(&path, &path_field)?;

        let instructions = entry
            .instructions
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::MissingRequiredField(format!(
                    "reviews.path_instructions[{}].instructions",
                    i
                ))
            })?;

        rules.push(PathRule::new(pattern, instructions));
    }

    Ok(rules)
}

fn pattern_strings(patterns: &[Pattern]) -> Vec<String> {
    patterns.iter().map(|p| p.as_str().to_string()).collect()
}

fn log_unknown_fields(prefix: &str, extra: &BTreeMap<String, serde_yaml::Value>) {
    for key in extra.keys() {
        debug!(field = %format!("{}{}", prefix, key), "ignoring unknown config field");
    }
}
