//! Implementation of the `revpath show` command.

use crate::cli::{OutputFormat, ShowArgs};
use revpath::config::Config;
use revpath::error::Result;

/// Execute the `revpath show` command.
pub fn cmd_show(config: &Config, args: &ShowArgs) -> Result<()> {
    let rendered = render(config, args.format)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub(super) fn render(config: &Config, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => config.to_yaml()?,
        OutputFormat::Json => config.to_json()?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
language: en-US
reviews:
  path_filters: ["!**/*.lock"]
  path_instructions:
    - path: "**/*.rs"
      instructions: "Rust rules."
"#;

    #[test]
    fn test_yaml_is_normalized() {
        let config = Config::from_yaml(DOC).unwrap();
        let out = render(&config, OutputFormat::Yaml).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value["reviews"]["profile"].as_str(), Some("chill"));
        assert_eq!(value["reviews"]["ignore_patterns"][0].as_str(), Some("**/*.lock"));
        assert!(value["reviews"].get("path_filters").is_none());
    }

    #[test]
    fn test_json_output() {
        let config = Config::from_yaml(DOC).unwrap();
        let out = render(&config, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["reviews"]["path_instructions"][0]["instructions"], "Rust rules.");
    }
}
