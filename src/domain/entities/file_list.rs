//! Resolved file list entity
//!
//! Ordered list of concrete files for one section. Order is the
//! concatenation order of the compiled output; duplicates are kept.

use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum ResolvedFile {
    /// A local file, either listed literally or found by discovery
    Local(PathBuf),
    /// A remote resource, passed through unchecked
    Remote(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedFileList {
    entries: Vec<ResolvedFile>,
}

impl ResolvedFileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_local(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(ResolvedFile::Local(path.into()));
    }

    pub fn push_remote(&mut self, url: impl Into<String>) {
        self.entries.push(ResolvedFile::Remote(url.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedFile> {
        self.entries.iter()
    }

    pub fn local_files(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|entry| match entry {
            ResolvedFile::Local(path) => Some(path.as_path()),
            ResolvedFile::Remote(_) => None,
        })
    }

    pub fn remote_files(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            ResolvedFile::Remote(url) => Some(url.as_str()),
            ResolvedFile::Local(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
