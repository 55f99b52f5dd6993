use std::path::PathBuf;

pub const FILE_EXTENSION: &str = "go";

pub const TEST_FILE_SUFFIX: &str = "_test.go";

/// Function name prefixes `go test` treats as tests.
pub const TEST_PREFIXES: &[&str] = &["Test", "Example", "Benchmark"];

/// Method that starts a subtest: `t.Run(name, fn)`.
pub const SUBTEST_METHOD: &str = "Run";

/// What to scan. Built once from the command line and passed down by
/// reference; nothing in the library reads process-wide flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Files or directories; relative paths are reported against each
    /// root's parent directory.
    pub roots: Vec<PathBuf>,
}

impl DiscoveryConfig {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub pretty: bool,
}
