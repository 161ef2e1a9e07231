//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations. Discovery uses
//! the `ignore` walker with gitignore-style masks: a mask without a slash
//! matches a file name at any depth, a mask with a slash matches the path
//! relative to the search root. Masks ignore case.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;

use crate::domain::ports::file_system::{FileQuery, FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_writable_dir(&self, path: &Path) -> bool {
        // Probe with an anonymous file; it is removed when dropped
        path.is_dir() && tempfile::tempfile_in(path).is_ok()
    }

    fn find_files(&self, query: &FileQuery) -> FsResult<Vec<PathBuf>> {
        if !query.root.is_dir() {
            return Err(FsError::NotFound(query.root.clone()));
        }

        let include = build_matcher(&query.root, &query.masks)?;
        let exclude = build_matcher(&query.root, &query.exclude)?;

        let mut walker = WalkBuilder::new(&query.root);
        walker
            .standard_filters(false)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b));
        if !query.recursive {
            walker.max_depth(Some(1));
        }

        let mut found = Vec::new();
        for entry in walker.build() {
            let entry = entry.map_err(|e| FsError::Other(e.to_string()))?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&query.root)
                .unwrap_or(entry.path());
            if matches(&include, relative) && !matches(&exclude, relative) {
                found.push(entry.into_path());
            }
        }

        Ok(found)
    }
}

fn build_matcher(root: &Path, masks: &[String]) -> FsResult<Gitignore> {
    let mut builder = GitignoreBuilder::new(root);
    builder
        .case_insensitive(true)
        .map_err(|e| FsError::InvalidPattern {
            pattern: masks.join(", "),
            message: e.to_string(),
        })?;
    for mask in masks {
        builder
            .add_line(None, mask)
            .map_err(|e| FsError::InvalidPattern {
                pattern: mask.clone(),
                message: e.to_string(),
            })?;
    }
    builder.build().map_err(|e| FsError::InvalidPattern {
        pattern: masks.join(", "),
        message: e.to_string(),
    })
}

fn matches(matcher: &Gitignore, relative: &Path) -> bool {
    matcher.matched(relative, false).is_ignore()
}
