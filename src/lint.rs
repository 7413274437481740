//! Optional lint pass over a loaded review configuration.
//!
//! Loading already guarantees every glob and enum is valid. The lint looks
//! for configurations that load fine but probably do not do what the author
//! meant:
//! - `duplicate-pattern`: two path rules share the same glob text
//! - `rule-always-ignored`: a path rule's glob is also an ignore pattern
//! - `duplicate-ignore`: an ignore pattern is declared twice
//! - `unbalanced-fence`: instruction text has an odd number of ``` fences
//! - `empty-custom-instructions`: `custom_instructions` is present but blank

use crate::config::Config;
use std::collections::HashMap;
use std::fmt;

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Probably unintended, but harmless.
    Warning,
    /// Will mislead the reviewer; `revpath lint` fails on these.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    /// Stable identifier, e.g. `duplicate-pattern`.
    pub code: &'static str,
    /// Where in the document, e.g. `reviews.path_instructions[2]`.
    pub location: String,
    pub message: String,
}

impl Finding {
    fn warning(code: &'static str, location: String, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            location,
            message,
        }
    }

    fn error(code: &'static str, location: String, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            location,
            message,
        }
    }
}

/// Findings from one lint run, in document order.
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    pub findings: Vec<Finding>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }
}

/// Run every lint check against `config`.
pub fn lint(config: &Config) -> LintReport {
    let mut findings = Vec::new();

    check_duplicate_rules(config, &mut findings);
    check_rules_always_ignored(config, &mut findings);
    check_duplicate_ignores(config, &mut findings);
    check_fences(config, &mut findings);
    check_custom_instructions(config, &mut findings);

    LintReport { findings }
}

fn check_duplicate_rules(config: &Config, findings: &mut Vec<Finding>) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (i, rule) in config.path_instructions.iter().enumerate() {
        let pattern = rule.pattern.as_str();
        if let Some(&first) = first_seen.get(pattern) {
            findings.push(Finding::warning(
                "duplicate-pattern",
                format!("reviews.path_instructions[{}]", i),
                format!(
                    "pattern '{}' is also used by reviews.path_instructions[{}]; both instruction blocks will apply",
                    pattern, first
                ),
            ));
        } else {
            first_seen.insert(pattern, i);
        }
    }
}

fn check_rules_always_ignored(config: &Config, findings: &mut Vec<Finding>) {
    for (i, rule) in config.path_instructions.iter().enumerate() {
        if config
            .ignore_patterns
            .patterns()
            .iter()
            .any(|ignored| ignored == &rule.pattern)
        {
            findings.push(Finding::warning(
                "rule-always-ignored",
                format!("reviews.path_instructions[{}]", i),
                format!(
                    "pattern '{}' is also an ignore pattern, so these instructions never apply",
                    rule.pattern
                ),
            ));
        }
    }
}

fn check_duplicate_ignores(config: &Config, findings: &mut Vec<Finding>) {
    let patterns = config.ignore_patterns.patterns();

    for (i, pattern) in patterns.iter().enumerate() {
        if patterns[..i].contains(pattern) {
            findings.push(Finding::warning(
                "duplicate-ignore",
                format!("ignore pattern #{}", i + 1),
                format!("'{}' is declared more than once", pattern),
            ));
        }
    }
}

fn check_fences(config: &Config, findings: &mut Vec<Finding>) {
    for (i, rule) in config.path_instructions.iter().enumerate() {
        if has_unbalanced_fence(&rule.instructions) {
            findings.push(Finding::error(
                "unbalanced-fence",
                format!("reviews.path_instructions[{}].instructions", i),
                "code fence (```) is opened but never closed".to_string(),
            ));
        }
    }

    if let Some(custom) = &config.custom_instructions
        && has_unbalanced_fence(custom)
    {
        findings.push(Finding::error(
            "unbalanced-fence",
            "custom_instructions".to_string(),
            "code fence (```) is opened but never closed".to_string(),
        ));
    }
}

fn check_custom_instructions(config: &Config, findings: &mut Vec<Finding>) {
    if let Some(custom) = &config.custom_instructions
        && custom.trim().is_empty()
    {
        findings.push(Finding::warning(
            "empty-custom-instructions",
            "custom_instructions".to_string(),
            "custom_instructions is present but blank".to_string(),
        ));
    }
}

/// Count lines opening or closing a fenced code block.
fn has_unbalanced_fence(text: &str) -> bool {
    let fences = text
        .lines()
        .filter(|line| line.trim_start().starts_with("```"))
        .count();
    fences % 2 != 0
}
