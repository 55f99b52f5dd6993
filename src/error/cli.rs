use thiserror::Error;

/// Argument mistakes caught before any file reaches the scanner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("ERROR: cannot specify both a file and a directory")]
    ConflictingInput,

    #[error("ERROR: required file, provided directory")]
    NotAFile,
}
