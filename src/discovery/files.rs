use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::config::{FILE_EXTENSION, TEST_FILE_SUFFIX};
use crate::error::IoError;

/// A test file together with the search root that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub root: PathBuf,
}

pub fn is_test_file(path: &Path) -> bool {
    let has_extension = path.extension().is_some_and(|ext| ext == FILE_EXTENSION);
    let has_suffix = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(TEST_FILE_SUFFIX));
    has_extension && has_suffix
}

/// Recursively collects test files under `root`. A file root yields itself
/// when it matches the naming convention.
pub fn find_test_files(root: &Path) -> Result<Vec<CandidateFile>, IoError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| IoError::walk_error(root, e))?;

        if entry.file_type().is_file() && is_test_file(entry.path()) {
            trace!(path = %entry.path().display(), "found test file");
            files.push(CandidateFile {
                path: entry.path().to_path_buf(),
                root: root.to_path_buf(),
            });
        }
    }

    Ok(files)
}
