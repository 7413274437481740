//! Implementation of the `revpath check` command.

use revpath::config::Config;
use revpath::error::Result;
use std::path::Path;

/// Execute the `revpath check` command.
///
/// Reaching this point means the config already loaded successfully, so
/// the command only reports what it declares.
pub fn cmd_check(path: &Path, config: &Config) -> Result<()> {
    print!("{}", render_summary(path, config));
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub(super) fn render_summary(path: &Path, config: &Config) -> String {
    let auto = &config.auto_review;
    let auto_review = if auto.enabled {
        format!("enabled (drafts: {})", yes_no(auto.drafts))
    } else {
        "disabled".to_string()
    };

    let mut out = format!("Config OK: {}\n\n", path.display());
    out.push_str(&format!("  language:            {}\n", config.language));
    out.push_str(&format!("  profile:             {}\n", config.review_profile));
    out.push_str(&format!(
        "  request changes:     {}\n",
        yes_no(config.request_changes_workflow)
    ));
    out.push_str(&format!("  early access:        {}\n", yes_no(config.early_access)));
    out.push_str(&format!("  auto review:         {}\n", auto_review));
    out.push_str(&format!(
        "  path rules:          {}\n",
        config.path_instructions.len()
    ));
    out.push_str(&format!(
        "  ignore patterns:     {}\n",
        config.ignore_patterns.patterns().len()
    ));
    out.push_str(&format!(
        "  include filters:     {}\n",
        config.include_patterns.patterns().len()
    ));
    out.push_str(&format!(
        "  custom instructions: {}\n",
        yes_no(config.custom_instructions.is_some())
    ));
    out
}
