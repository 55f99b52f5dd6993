/// gotest-ls
///
/// Lists Go tests, subtests and table-driven test cases with their
/// locations. Files are parsed with Tree-sitter and scanned purely
/// syntactically; nothing is compiled or executed.
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod syntax;
pub mod utils;

pub use config::{DiscoveryConfig, OutputOptions};
pub use discovery::{discover, discover_with};
pub use error::{Error, Result};
pub use output::{OutputFormatter, TestDetail, NO_TESTS_FOUND};
