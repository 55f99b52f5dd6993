//! Diagnostic logging. Everything goes to stderr; stdout is reserved for
//! the JSON listing so it can be piped straight into editors and tools.
use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::EnvFilter;

const LOG_TARGET: &str = "gotest_ls";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    /// `-q` wins over any number of `-v`.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, 2) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    /// Filter directive applied when `RUST_LOG` is not set.
    pub fn directive(self) -> String {
        let level = match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        format!("{LOG_TARGET}={level}")
    }
}

/// Builds a subscriber writing to `writer`. Source locations are added from
/// `-vv` on.
pub fn subscriber<W>(
    verbosity: Verbosity,
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let detailed = verbosity >= Verbosity::Debug;

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .with_file(detailed)
        .with_line_number(detailed)
        .without_time()
        .compact()
        .finish()
}

pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    // Keeps whichever subscriber was installed first.
    let _ = tracing::subscriber::set_global_default(subscriber(
        verbosity,
        filter,
        std::io::stderr,
        std::io::stderr().is_terminal(),
    ));
}
