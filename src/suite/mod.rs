//! Suite execution engine
//!
//! Loads the hierarchical suite description, resolves requested category
//! paths, runs the leaf test scripts and folds their results into per
//! category verdicts.

pub mod cache;
pub mod executor;
pub mod model;
pub mod resolver;
pub mod run;
pub mod runner;

pub use executor::Verdict;
pub use model::{Category, SuiteTree, Test};
pub use run::{run_suite, RunOptions};
