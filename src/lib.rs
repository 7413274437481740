//! revpath: path-rule engine for code-review configuration documents.
//!
//! A review configuration (conventionally `.coderabbit.yaml`) declares glob
//! ignore lists and glob-to-instruction rules. This crate loads such a
//! document into an immutable [`config::Config`] and answers, for any
//! repo-relative path, whether it is excluded from review and which
//! instruction blocks apply.
//!
//! ```
//! use revpath::config::Config;
//! use revpath::resolve::ReviewPlan;
//!
//! let config = Config::from_yaml(r#"
//! language: en-US
//! reviews:
//!   path_instructions:
//!     - path: "**/*View.swift"
//!       instructions: "Keep view bodies small."
//!   ignore_patterns: ["**/build/**"]
//! "#).unwrap();
//!
//! assert!(config.review_plan("ios/build/App.o").is_excluded());
//! match config.review_plan("App/Views/HomeView.swift") {
//!     ReviewPlan::Review { instructions, .. } => {
//!         assert_eq!(instructions, vec!["Keep view bodies small."]);
//!     }
//!     ReviewPlan::Excluded(_) => unreachable!(),
//! }
//! ```

pub mod config;
pub mod discover;
pub mod error;
pub mod exit_codes;
pub mod glob;
pub mod ignore;
pub mod lint;
pub mod logging;
pub mod resolve;
