use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to stat '{path}': {source}")]
    StatError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to walk '{path}': {source}")]
    WalkError {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to resolve current directory: {source}")]
    CurrentDir { source: std::io::Error },

    #[error("cannot make '{path}' relative to '{base}'")]
    RelativePath { path: PathBuf, base: PathBuf },
}

impl IoError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn stat_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::file_not_found(path);
        }
        Self::StatError {
            path: path.into(),
            source,
        }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn walk_error(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::WalkError {
            path: path.into(),
            source,
        }
    }

    pub fn relative_path(path: impl Into<PathBuf>, base: impl Into<PathBuf>) -> Self {
        Self::RelativePath {
            path: path.into(),
            base: base.into(),
        }
    }
}
