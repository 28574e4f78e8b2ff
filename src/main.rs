//! SBIT - Simple Build In Tests
//!
//! Command line entry point. Tests are defined in a YAML file describing a
//! hierarchical structure of categories; the tests themselves are scripts
//! stored in a script library directory.

use clap::Parser;
use sbit::commands::Commands;
use sbit::common::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sbit", about = "Runs hierarchical suites of build-in test scripts")]
#[command(version, long_about = None)]
struct Cli {
    /// Minimal log level
    #[arg(long, global = true, default_value = "warn",
          value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: String,

    /// Configuration file to use instead of ~/.sbitrc
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match sbit::cli::dispatch(cli.command, cli.config.as_deref()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
