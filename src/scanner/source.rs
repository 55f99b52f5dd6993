use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoError, Result};
use crate::syntax::{LineIndex, SourceParser, SyntaxTree};

/// A parsed test file and the search root it was found under.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub root: PathBuf,
    pub tree: SyntaxTree,
    pub lines: LineIndex,
}

impl SourceFile {
    pub fn load(path: &Path, root: &Path, parser: &dyn SourceParser) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
        Self::from_source(path, root, &source, parser)
    }

    pub fn from_source(
        path: &Path,
        root: &Path,
        source: &str,
        parser: &dyn SourceParser,
    ) -> Result<Self> {
        let tree = parser.parse(path, source)?;
        Ok(Self {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
            tree,
            lines: LineIndex::new(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::syntax::GoParser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_parses_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a_test.go");
        fs::write(&path, "package a\n\nfunc TestA() {}\n").unwrap();

        let file = SourceFile::load(&path, temp_dir.path(), &GoParser::new()).unwrap();

        assert_eq!(file.tree.functions().count(), 1);
        let func = file.tree.functions().next().unwrap();
        assert_eq!(file.lines.line(func.name.offset), 3);
        assert_eq!(file.root, temp_dir.path());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SourceFile::load(
            Path::new("/nonexistent/a_test.go"),
            Path::new("/nonexistent"),
            &GoParser::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io(IoError::ReadError { .. })));
    }

    #[test]
    fn test_invalid_source_is_parser_error() {
        let err = SourceFile::from_source(
            Path::new("dummy_test.go"),
            Path::new("."),
            "package a\n\nfunc {\n",
            &GoParser::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Parser(_)));
    }
}
