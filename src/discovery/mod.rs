//! Finds test files under the configured roots and turns them into one
//! sorted list of [`TestDetail`] records.
pub mod files;

pub use files::{find_test_files, is_test_file, CandidateFile};

use rayon::prelude::*;
use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::error::Result;
use crate::output::{FileLocation, TestDetail};
use crate::scanner::{scan_tree, SourceFile};
use crate::syntax::{GoParser, SourceParser};

/// Lists every test under `config.roots`, sorted by name.
///
/// Finding nothing is not an error. Any unreadable path or unparsable file
/// fails the whole run.
pub fn discover(config: &DiscoveryConfig) -> Result<Vec<TestDetail>> {
    discover_with(config, &GoParser::new())
}

pub fn discover_with(
    config: &DiscoveryConfig,
    parser: &dyn SourceParser,
) -> Result<Vec<TestDetail>> {
    let mut candidates = Vec::new();
    for root in &config.roots {
        let found = find_test_files(root)?;
        debug!(root = %root.display(), files = found.len(), "collected test files");
        candidates.extend(found);
    }

    // Files are independent; ordering comes from the sort below.
    let per_file = candidates
        .par_iter()
        .map(|candidate| scan_candidate(candidate, parser))
        .collect::<Result<Vec<_>>>()?;

    let mut tests: Vec<TestDetail> = per_file.into_iter().flatten().collect();
    sort_tests(&mut tests);

    debug!(files = candidates.len(), tests = tests.len(), "discovery complete");
    Ok(tests)
}

fn scan_candidate(candidate: &CandidateFile, parser: &dyn SourceParser) -> Result<Vec<TestDetail>> {
    let file = SourceFile::load(&candidate.path, &candidate.root, parser)?;
    let location = FileLocation::resolve(&file.path, &file.root)?;

    let tests = scan_tree(&file.tree);
    debug!(path = %file.path.display(), tests = tests.len(), "scanned file");

    Ok(tests
        .iter()
        .map(|test| TestDetail::new(test, &location, &file.lines))
        .collect())
}

/// Byte-wise ascending by name; equal names keep their encounter order.
pub fn sort_tests(tests: &mut [TestDetail]) {
    tests.sort_by(|a, b| a.name.cmp(&b.name));
}
