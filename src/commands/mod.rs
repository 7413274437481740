//! Command implementations for revpath.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared config-locating helper. Each command
//! renders its output to a `String` so it can be tested without a terminal.

mod check;
mod lint;
mod resolve;
mod show;

use crate::cli::{Cli, Command};
use revpath::config::Config;
use revpath::discover::{CONFIG_FILE_NAMES, discover};
use revpath::error::{Result, RevpathError};
use std::path::{Path, PathBuf};
use tracing::info;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let (path, config) = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Check => check::cmd_check(&path, &config),
        Command::Resolve(args) => resolve::cmd_resolve(&config, &args),
        Command::Lint => lint::cmd_lint(&config),
        Command::Show(args) => show::cmd_show(&config, &args),
    }
}

/// Load the config from `explicit`, or discover it from the current directory.
fn load_config(explicit: Option<&Path>) -> Result<(PathBuf, Config)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().map_err(|e| {
                RevpathError::UserError(format!("failed to read current directory: {}", e))
            })?;
            discover(&cwd).ok_or_else(|| {
                RevpathError::UserError(format!(
                    "no review config found in '{}' or any parent directory (looked for {}). Use --config to point at one.",
                    cwd.display(),
                    CONFIG_FILE_NAMES.join(", ")
                ))
            })?
        }
    };

    info!(path = %path.display(), "using review config");
    let config = Config::load(&path)?;
    Ok((path, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use revpath::error::ConfigError;
    use revpath::exit_codes;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("review.yaml");
        fs::write(&path, "language: en-US\nreviews: {}\n").unwrap();

        let (loaded_from, config) = load_config(Some(path.as_path())).unwrap();
        assert_eq!(loaded_from, path);
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn test_missing_explicit_config_is_user_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yaml");
        let err = load_config(Some(missing.as_path())).unwrap_err();

        assert!(matches!(err, RevpathError::Config(ConfigError::Read { .. })));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn test_invalid_config_exit_code() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("review.yaml");
        fs::write(&path, "reviews: {}\n").unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::INVALID_CONFIG);
    }
}
