//! SBIT - Simple Build In Tests
//!
//! Executes hierarchical suites of externally defined test scripts and
//! reports pass/fail status per branch of the hierarchy. Suites are YAML
//! trees of categories; leaf tests are executable scripts stored in a
//! script library directory.

pub mod cli;
pub mod commands;
pub mod common;
pub mod suite;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use suite::{run_suite, Category, RunOptions, SuiteTree, Test, Verdict};
