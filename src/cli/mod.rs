//! CLI command handling
//!
//! Merges configuration file values with command line flags and invokes the
//! run orchestrator. Flags always win over the configuration file.

use std::path::Path;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{Error, Result};
use crate::suite::run::{run_suite, RunOptions};

/// Dispatch a CLI command
///
/// Returns the overall success of the run; `false` maps to a non-zero
/// process exit code in `main`.
pub fn dispatch(command: Commands, config_path: Option<&Path>) -> Result<bool> {
    match command {
        Commands::RunSuite {
            suite_path,
            library_path,
            categories,
            aggregation_level,
            no_result_cache,
            fail_fast,
        } => {
            let config = Config::load(config_path)?;

            let suite_path = suite_path
                .or_else(|| config.suite_path())
                .ok_or(Error::SuiteFileUndefined)?;
            let library_path = library_path
                .or_else(|| config.library_path())
                .ok_or(Error::LibraryPathUndefined)?;

            let options = RunOptions {
                suite_path,
                library_path,
                categories,
                aggregation_level,
                use_cache: !no_result_cache,
                fail_fast,
            };

            run_suite(&options)
        }
    }
}
