use clap::{CommandFactory, Parser};
use std::fs;
use std::path::PathBuf;

use crate::config::{DiscoveryConfig, OutputOptions};
use crate::error::{CliError, IoError, Result};

const EXAMPLES: &str = "\
Examples:
  gotest-ls .
  gotest-ls -p ./cmd
  gotest-ls -p ./cmd ./pkg
  gotest-ls -f ./pkg/random_test.go
  gotest-ls -p -f ./pkg/random_test.go";

#[derive(Parser, Debug)]
#[command(name = "gotest-ls")]
#[command(about = "gotest-ls provides a list of all tests in a package or a file in JSON format.", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Directories to search recursively for *_test.go files
    #[arg(value_name = "DIRECTORIES")]
    pub dirs: Vec<PathBuf>,

    /// Path to a file, cannot be used with directories
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Pretty print the output in JSON format
    #[arg(short, long)]
    pub pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Nothing to scan: show usage instead.
    pub fn requires_help(&self) -> bool {
        self.dirs.is_empty() && self.file.is_none()
    }

    pub fn validate(&self) -> Result<DiscoveryConfig> {
        let Some(file) = &self.file else {
            return Ok(DiscoveryConfig::new(self.dirs.clone()));
        };

        if !self.dirs.is_empty() {
            return Err(CliError::ConflictingInput.into());
        }

        let metadata = fs::metadata(file).map_err(|e| IoError::stat_error(file, e))?;
        if metadata.is_dir() {
            return Err(CliError::NotAFile.into());
        }

        Ok(DiscoveryConfig::new(vec![file.clone()]))
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            pretty: self.pretty,
        }
    }
}

pub fn print_help() -> std::io::Result<()> {
    Args::command().print_help()
}
