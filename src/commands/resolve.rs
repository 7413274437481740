//! Implementation of the `revpath resolve` command.

use crate::cli::ResolveArgs;
use revpath::config::Config;
use revpath::error::Result;
use revpath::glob::normalize_path;
use revpath::resolve::{Exclusion, ReviewPlan, matching_rules};

/// Execute the `revpath resolve` command.
pub fn cmd_resolve(config: &Config, args: &ResolveArgs) -> Result<()> {
    for path in &args.paths {
        print!("{}", render_path(config, path));
    }
    Ok(())
}

/// Render the review plan for one path.
pub(super) fn render_path(config: &Config, path: &str) -> String {
    let path = normalize_path(path);
    let mut out = format!("{}\n", path);

    if let ReviewPlan::Excluded(exclusion) = config.review_plan(&path) {
        match exclusion {
            Exclusion::Ignored { pattern } => {
                out.push_str(&format!("  excluded (matches ignore pattern: {})\n", pattern));
            }
            Exclusion::NotIncluded => {
                out.push_str("  excluded (not covered by any path filter)\n");
            }
        }
        out.push('\n');
        return out;
    }

    let mut matched = 0;
    for (i, rule) in matching_rules(&path, &config.path_instructions).enumerate() {
        matched += 1;
        out.push_str(&format!("  [{}] {}\n", i + 1, rule.pattern));
        push_indented(&mut out, &rule.instructions);
    }

    if matched == 0 {
        out.push_str("  no path instructions match\n");
    }

    if let Some(custom) = &config.custom_instructions {
        out.push_str("  [custom]\n");
        push_indented(&mut out, custom);
    }

    out.push('\n');
    out
}

fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("      {}\n", line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
language: en-US
custom_instructions: "Be concise."
reviews:
  path_instructions:
    - path: "**/*View.swift"
      instructions: |
        Keep view bodies small.
    - path: "**/Views/**/*.swift"
      instructions: |
        No networking in views.

        Use view models instead.
  ignore_patterns:
    - "**/build/**"
"#;

    #[test]
    fn test_render_matching_rules_in_order() {
        let config = Config::from_yaml(DOC).unwrap();
        let out = render_path(&config, "App/Views/HomeView.swift");

        let expected = "App/Views/HomeView.swift\n\
                        \x20 [1] **/*View.swift\n\
                        \x20     Keep view bodies small.\n\
                        \x20 [2] **/Views/**/*.swift\n\
                        \x20     No networking in views.\n\
                        \n\
                        \x20     Use view models instead.\n\
                        \x20 [custom]\n\
                        \x20     Be concise.\n\
                        \n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_ignored_path() {
        let config = Config::from_yaml(DOC).unwrap();
        let out = render_path(&config, "project/build/output.o");

        assert_eq!(
            out,
            "project/build/output.o\n  excluded (matches ignore pattern: **/build/**)\n\n"
        );
    }

    #[test]
    fn test_render_unmatched_path() {
        let config = Config::from_yaml(DOC).unwrap();
        let out = render_path(&config, "./README.md");

        assert!(out.starts_with("README.md\n"));
        assert!(out.contains("no path instructions match"));
        assert!(out.contains("[custom]"));
    }

    #[test]
    fn test_render_not_included() {
        let config = Config::from_yaml(
            "language: en-US\nreviews:\n  path_filters: [\"Sources/**\"]\n",
        )
        .unwrap();
        let out = render_path(&config, "Scripts/run.sh");

        assert!(out.contains("excluded (not covered by any path filter)"));
    }
}
