//! Error types for revpath.
//!
//! Uses thiserror for derive macros. `ConfigError` is the load-time taxonomy
//! returned by the library; `RevpathError` wraps it for the CLI and maps each
//! variant to a process exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a review configuration document can fail to load.
///
/// Loading is all-or-nothing: the first invalid field aborts the load and no
/// partial configuration is ever returned.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not structurally valid YAML, or has the wrong shape.
    #[error("malformed config document: {0}")]
    MalformedDocument(String),

    /// A glob pattern failed syntax validation.
    #[error("invalid glob pattern in {field}: '{pattern}' - {reason}")]
    InvalidGlob {
        field: String,
        pattern: String,
        reason: String,
    },

    /// A regular expression failed to compile.
    #[error("invalid regex in {field}: '{pattern}' - {reason}")]
    InvalidRegex {
        field: String,
        pattern: String,
        reason: String,
    },

    /// A required field is absent or blank.
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// A field holds a value outside its allowed set.
    #[error("invalid value '{value}' for {field} (expected one of: {expected})")]
    InvalidEnum {
        field: String,
        value: String,
        expected: String,
    },
}

/// Main error type for the revpath CLI.
#[derive(Error, Debug)]
pub enum RevpathError {
    /// User provided invalid arguments or no config could be located.
    #[error("{0}")]
    UserError(String),

    /// The review configuration failed to load.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The lint pass reported at least one error-level finding.
    #[error("lint failed: {0}")]
    LintFailed(String),
}

impl RevpathError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RevpathError::UserError(_) => exit_codes::USER_ERROR,
            RevpathError::Config(ConfigError::Read { .. }) => exit_codes::USER_ERROR,
            RevpathError::Config(_) => exit_codes::INVALID_CONFIG,
            RevpathError::LintFailed(_) => exit_codes::LINT_FAILURE,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, RevpathError>;
