//! Exit code constants for the revpath CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, config file missing or unreadable)
//! - 2: Invalid configuration document
//! - 3: Lint reported error-level findings

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, or the config file could not be found or read.
pub const USER_ERROR: i32 = 1;

/// The configuration document failed to load.
pub const INVALID_CONFIG: i32 = 2;

/// The lint pass found at least one error-level issue.
pub const LINT_FAILURE: i32 = 3;
