//! Suite run orchestration
//!
//! Determines the requested top level categories, resolves all of them up
//! front, executes each one and prints the accumulated report.

use std::path::PathBuf;

use colored::Colorize;

use crate::common::Result;
use crate::suite::executor::Executor;
use crate::suite::model::SuiteTree;
use crate::suite::resolver;

/// Everything a suite run needs, merged from flags and configuration
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Suite description file
    pub suite_path: PathBuf,
    /// Directory prefix under which every test script is resolved
    pub library_path: PathBuf,
    /// Requested category paths; empty means every top level category
    pub categories: Vec<String>,
    /// Depth ceiling below which report lines are retained
    pub aggregation_level: Option<u32>,
    /// Whether the result cache is active
    pub use_cache: bool,
    /// Stop at the first failing test
    pub fail_fast: bool,
}

/// Run the requested categories of a suite and print the report
///
/// Every requested path is resolved before anything executes, so an unknown
/// category aborts with no partial report. Returns whether every requested
/// category ended OK.
pub fn run_suite(options: &RunOptions) -> Result<bool> {
    let tree = SuiteTree::load(&options.suite_path)?;
    tracing::debug!("Using library path : {}", options.library_path.display());
    tracing::debug!("Using test suite   : {}", options.suite_path.display());

    let requested: Vec<String> = if options.categories.is_empty() {
        tree.categories.iter().map(|c| c.name.clone()).collect()
    } else {
        options.categories.clone()
    };

    let mut selected = Vec::with_capacity(requested.len());
    for path in &requested {
        selected.push(resolver::resolve(&tree.categories, path)?);
    }

    let mut executor = Executor::new(
        options.library_path.clone(),
        options.aggregation_level,
        options.use_cache,
        options.fail_fast,
    );

    let mut all_ok = true;
    for category in selected {
        println!("[+] {}", category.name.yellow().bold());
        println!("------------------------------------");
        if let Some(description) = &category.description {
            println!(" {description}");
        }

        let report = executor.execute(category, 0);
        all_ok &= report.verdict.as_bool();
        for line in &report.lines {
            println!("{line}");
        }
        println!();

        if executor.halted() {
            break;
        }
    }

    Ok(all_ok)
}
