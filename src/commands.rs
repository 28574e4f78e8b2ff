//! CLI command definitions
//!
//! Defines the clap subcommands for the sbit CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Execute the tests defined in the given suite file
    #[command(name = "run-suite")]
    RunSuite {
        /// Path to the file containing the test suite (YAML format)
        #[arg(long)]
        suite_path: Option<PathBuf>,

        /// Path to the directory storing the test scripts
        #[arg(long)]
        library_path: Option<PathBuf>,

        /// Test category to execute; repeatable, defaults to every top level category
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Test depth used for result aggregation
        #[arg(long)]
        aggregation_level: Option<u32>,

        /// Deactivate the script result cache (scripts can be run n times)
        #[arg(long)]
        no_result_cache: bool,

        /// Stop at the first error instead of running as long as possible
        #[arg(long)]
        fail_fast: bool,
    },
}
