//! FileSystem port - abstraction over the filesystem queries resolution needs
//!
//! Resolution only ever asks questions of the filesystem (does this exist,
//! is this directory writable, which files match these masks); it never
//! writes. Keeping those questions behind a trait lets the domain services
//! stay free of direct I/O.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File or directory not found
    NotFound(PathBuf),
    /// A file mask could not be compiled
    InvalidPattern { pattern: String, message: String },
    /// Other error
    Other(String),
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid pattern '{}': {}", pattern, message)
            }
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// A mask-based file search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileQuery {
    /// Directory the search starts in (must exist)
    pub root: PathBuf,
    /// Masks a file must match (any of them)
    pub masks: Vec<String>,
    /// Masks that remove an otherwise matching file
    pub exclude: Vec<String>,
    /// Descend into subdirectories
    pub recursive: bool,
}

impl FileQuery {
    pub fn new(root: impl Into<PathBuf>, masks: Vec<String>) -> Self {
        Self {
            root: root.into(),
            masks,
            exclude: Vec::new(),
            recursive: false,
        }
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with the `ignore` walker
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if the path is an existing directory new files can be created in
    fn is_writable_dir(&self, path: &Path) -> bool;

    /// Enumerate files matching a query.
    ///
    /// The order must be stable for an unchanged filesystem.
    fn find_files(&self, query: &FileQuery) -> FsResult<Vec<PathBuf>>;
}
