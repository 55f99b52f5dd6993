use serde::Serialize;
use std::path::Path;

use crate::error::IoError;
use crate::scanner::DiscoveredTest;
use crate::syntax::LineIndex;
use crate::utils::{absolute_path, clean_path, normalize_test_name, relative_path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDetail {
    pub name: String,
    pub file_name: String,
    pub relative_path: String,
    pub absolute_path: String,
    pub line: usize,
    /// 1-based byte position within the file. Only meaningful together
    /// with the file it came from.
    pub pos: usize,
}

/// Path data shared by every test in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    pub file_name: String,
    pub relative_path: String,
    pub absolute_path: String,
}

impl FileLocation {
    /// `relative_path` is taken from the parent of `root`, so a directory
    /// root keeps its own name in the path and a file root reduces to the
    /// bare file name.
    pub fn resolve(path: &Path, root: &Path) -> Result<Self, IoError> {
        let absolute = absolute_path(path)?;
        let root = clean_path(root);
        let base = root.parent().unwrap_or(root.as_path());
        let relative = relative_path(base, path)?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            file_name,
            relative_path: relative.to_string_lossy().into_owned(),
            absolute_path: absolute.to_string_lossy().into_owned(),
        })
    }
}

impl TestDetail {
    pub fn new(test: &DiscoveredTest, location: &FileLocation, lines: &LineIndex) -> Self {
        let offset = test.offset();
        Self {
            name: qualified_name(
                &test.function,
                test.child.as_ref().map(|child| child.name.as_str()),
            ),
            file_name: location.file_name.clone(),
            relative_path: location.relative_path.clone(),
            absolute_path: location.absolute_path.clone(),
            line: lines.line(offset),
            pos: offset + 1,
        }
    }
}

pub fn qualified_name(parent: &str, child: Option<&str>) -> String {
    match child {
        Some(child) => format!("{parent}/{}", normalize_test_name(child)),
        None => parent.to_string(),
    }
}
