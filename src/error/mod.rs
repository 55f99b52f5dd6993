mod cli;
mod io;
mod parser;

pub use cli::CliError;
pub use io::IoError;
pub use parser::ParserError;

use thiserror::Error;

/// Prefix for failures that are not argument mistakes.
pub const UNKNOWN_ERROR: &str = "ERROR: unknown error";

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error("{prefix}: {0}", prefix = UNKNOWN_ERROR)]
    Io(#[from] IoError),

    #[error("{prefix}: {0}", prefix = UNKNOWN_ERROR)]
    Parser(#[from] ParserError),

    #[error("{prefix}: {0}", prefix = UNKNOWN_ERROR)]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_errors_are_not_wrapped() {
        let err = Error::from(CliError::ConflictingInput);
        assert_eq!(
            err.to_string(),
            "ERROR: cannot specify both a file and a directory"
        );
    }

    #[test]
    fn test_io_errors_carry_unknown_marker() {
        let err = Error::from(IoError::file_not_found("./false-directory"));
        assert_eq!(
            err.to_string(),
            "ERROR: unknown error: file not found: ./false-directory"
        );
    }

    #[test]
    fn test_parser_errors_carry_unknown_marker() {
        let err = Error::from(ParserError::syntax_error("dummy_test.go", 7, 1));
        assert!(err.to_string().starts_with(UNKNOWN_ERROR));
        assert!(err.to_string().contains("dummy_test.go:7:1"));
    }
}
