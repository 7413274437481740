//! Path-instruction resolution.
//!
//! Rules are evaluated in declaration order and every rule whose pattern
//! matches contributes its instruction text. Overlapping rules concatenate;
//! nothing is overridden, merged or deduplicated.

use crate::config::{Config, PathRule, ReviewProfile};
use tracing::debug;

/// Collect the instruction blocks that apply to `path`, in rule order.
///
/// A path matching no rule yields an empty list; callers then fall back to
/// the document's custom instructions alone.
///
/// This does not consult the ignore list. Use [`Config::review_plan`] to
/// apply the exclusion gate first.
pub fn resolve<'a>(path: &str, rules: &'a [PathRule]) -> Vec<&'a str> {
    matching_rules(path, rules)
        .map(|rule| rule.instructions.as_str())
        .collect()
}

/// The rules that apply to `path`, in declaration order.
pub fn matching_rules<'a>(path: &str, rules: &'a [PathRule]) -> impl Iterator<Item = &'a PathRule> {
    rules.iter().filter(move |rule| rule.matches(path))
}

/// Why a path receives no review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// The path matched an ignore pattern.
    Ignored { pattern: String },
    /// Include filters are declared and none of them matched.
    NotIncluded,
}

/// What the reviewer should do with a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewPlan<'a> {
    /// The path is excluded from review entirely.
    Excluded(Exclusion),
    /// The path is reviewed with these instructions.
    Review {
        /// Matching path rule instructions, in declaration order.
        instructions: Vec<&'a str>,
        /// Document-wide instructions, if any.
        custom_instructions: Option<&'a str>,
        profile: ReviewProfile,
    },
}

impl ReviewPlan<'_> {
    pub fn is_excluded(&self) -> bool {
        matches!(self, ReviewPlan::Excluded(_))
    }
}

impl Config {
    /// Decide how `path` is reviewed.
    ///
    /// Ignore patterns are checked first, then include filters. Only paths
    /// passing both receive instructions.
    pub fn review_plan(&self, path: &str) -> ReviewPlan<'_> {
        if let Some(pattern) = self.ignore_patterns.first_match(path) {
            debug!(path, pattern = %pattern, "path ignored");
            return ReviewPlan::Excluded(Exclusion::Ignored {
                pattern: pattern.as_str().to_string(),
            });
        }

        if !self.include_patterns.admits(path) {
            debug!(path, "path not covered by any include filter");
            return ReviewPlan::Excluded(Exclusion::NotIncluded);
        }

        let instructions = resolve(path, &self.path_instructions);
        debug!(path, matched = instructions.len(), "resolved path instructions");

        ReviewPlan::Review {
            instructions,
            custom_instructions: self.custom_instructions.as_deref(),
            profile: self.review_profile,
        }
    }

    /// Whether `path` is excluded from review.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.ignore_patterns.is_ignored(path) || !self.include_patterns.admits(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glob::Pattern;
    use proptest::prelude::*;

    fn rule(pattern: &str, instructions: &str) -> PathRule {
        PathRule::new(Pattern::new(pattern, "path").unwrap(), instructions)
    }

    #[test]
    fn test_overlapping_rules_concatenate_in_order() {
        let rules = vec![
            rule("**/*View.swift", "keep views small"),
            rule("**/Views/**/*.swift", "no networking in views"),
        ];

        let got = resolve("App/Views/HomeView.swift", &rules);
        assert_eq!(got, vec!["keep views small", "no networking in views"]);

        let reversed: Vec<PathRule> = rules.into_iter().rev().collect();
        let got = resolve("App/Views/HomeView.swift", &reversed);
        assert_eq!(got, vec!["no networking in views", "keep views small"]);
    }

    #[test]
    fn test_identical_instructions_are_not_deduplicated() {
        let rules = vec![rule("**/*.rs", "same"), rule("src/**", "same")];
        assert_eq!(resolve("src/lib.rs", &rules), vec!["same", "same"]);
    }

    #[test]
    fn test_matching_rules_keeps_patterns() {
        let rules = vec![rule("**/*.rs", "rust"), rule("docs/**", "docs"), rule("src/**", "src")];

        let patterns: Vec<&str> = matching_rules("src/lib.rs", &rules)
            .map(|r| r.pattern.as_str())
            .collect();
        assert_eq!(patterns, vec!["**/*.rs", "src/**"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let rules = vec![rule("**/*.swift", "swift rules")];
        assert!(resolve("src/main.rs", &rules).is_empty());
        assert!(resolve("src/main.rs", &[]).is_empty());
    }

    #[test]
    fn test_only_matching_rules_contribute() {
        let rules = vec![
            rule("**/Models/**/*.swift", "models"),
            rule("**/*.rs", "rust"),
            rule("**/*.swift", "swift"),
        ];

        assert_eq!(resolve("App/Models/User.swift", &rules), vec!["models", "swift"]);
        assert_eq!(resolve("App/ViewModels/UserVM.swift", &rules), vec!["swift"]);
    }

    // =====================================================================
    // Review plan
    // =====================================================================

    const DOC: &str = r#"
language: en-US
custom_instructions: "Be concise."
reviews:
  profile: assertive
  path_instructions:
    - path: "**/*View.swift"
      instructions: "view rule"
    - path: "**/Views/**/*.swift"
      instructions: "views dir rule"
    - path: "**/build/**"
      instructions: "never applied"
  ignore_patterns:
    - "**/build/**"
"#;

    #[test]
    fn test_review_plan_applies_instructions() {
        let config = Config::from_yaml(DOC).unwrap();

        let plan = config.review_plan("App/Views/HomeView.swift");
        assert_eq!(
            plan,
            ReviewPlan::Review {
                instructions: vec!["view rule", "views dir rule"],
                custom_instructions: Some("Be concise."),
                profile: ReviewProfile::Assertive,
            }
        );
    }

    #[test]
    fn test_review_plan_ignored_path_gets_no_instructions() {
        let config = Config::from_yaml(DOC).unwrap();

        let plan = config.review_plan("project/build/output.o");
        assert_eq!(
            plan,
            ReviewPlan::Excluded(Exclusion::Ignored {
                pattern: "**/build/**".to_string()
            })
        );
        assert!(plan.is_excluded());
        assert!(config.is_excluded("project/build/output.o"));
        assert!(!config.is_excluded("project/src/output.o"));
    }

    #[test]
    fn test_review_plan_unmatched_path_falls_back_to_custom() {
        let config = Config::from_yaml(DOC).unwrap();

        match config.review_plan("README.md") {
            ReviewPlan::Review {
                instructions,
                custom_instructions,
                ..
            } => {
                assert!(instructions.is_empty());
                assert_eq!(custom_instructions, Some("Be concise."));
            }
            other => panic!("expected Review, got {other:?}"),
        }
    }

    #[test]
    fn test_review_plan_include_filters() {
        let yaml = r#"
language: en-US
reviews:
  path_filters:
    - "Sources/**"
    - "!Sources/Generated/**"
"#;
        let config = Config::from_yaml(yaml).unwrap();

        assert!(!config.review_plan("Sources/App/main.swift").is_excluded());
        assert_eq!(
            config.review_plan("Scripts/release.sh"),
            ReviewPlan::Excluded(Exclusion::NotIncluded)
        );
        assert_eq!(
            config.review_plan("Sources/Generated/Api.swift"),
            ReviewPlan::Excluded(Exclusion::Ignored {
                pattern: "Sources/Generated/**".to_string()
            })
        );
    }

    // =====================================================================
    // Ordering property
    // =====================================================================

    const TARGET: &str = "App/Views/HomeView.swift";

    /// Patterns that match `TARGET`.
    const MATCHING: &[&str] = &["**/*.swift", "**/Views/**", "App/**", "**/*View.swift"];

    /// Patterns that never match `TARGET`.
    const NON_MATCHING: &[&str] = &["**/*.rs", "docs/**", "**/Models/**", "*.swift"];

    proptest! {
        #[test]
        fn prop_matching_order_survives_interleaving(
            matching in proptest::sample::subsequence(MATCHING.to_vec(), 0..=MATCHING.len()),
            noise in proptest::collection::vec(proptest::sample::select(NON_MATCHING.to_vec()), 0..8),
            slots in proptest::collection::vec(any::<bool>(), 0..16),
        ) {
            // Interleave noise between matching rules according to `slots`.
            let mut rules = Vec::new();
            let mut m = matching.iter().enumerate();
            let mut n = noise.iter();
            for take_noise in slots {
                let next = if take_noise { n.next().map(|p| (*p, "noise".to_string())) } else { None };
                match next {
                    Some((p, text)) => rules.push(rule(p, &text)),
                    None => {
                        if let Some((i, p)) = m.next() {
                            rules.push(rule(p, &format!("m{i}")));
                        }
                    }
                }
            }
            for (i, p) in m {
                rules.push(rule(p, &format!("m{i}")));
            }
            for p in n {
                rules.push(rule(p, "noise"));
            }

            let expected: Vec<String> = (0..matching.len()).map(|i| format!("m{i}")).collect();
            let got = resolve(TARGET, &rules);
            prop_assert_eq!(got, expected.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
