//! Filter Registry Port
//!
//! Filters are referenced by opaque identifiers in configuration. The
//! compiler-construction step resolves those identifiers through a
//! `FilterRegistry` into `AssetFilter` handles.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::value_objects::FilterId;

/// Error raised by a filter while transforming content
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("filter failed on {path}: {message}")]
pub struct FilterError {
    pub path: PathBuf,
    pub message: String,
}

/// Transforms asset content given the path it was read from
pub trait AssetFilter: Send + Sync {
    fn apply(&self, content: &str, path: &Path) -> Result<String, FilterError>;
}

impl<F> AssetFilter for F
where
    F: Fn(&str, &Path) -> Result<String, FilterError> + Send + Sync,
{
    fn apply(&self, content: &str, path: &Path) -> Result<String, FilterError> {
        self(content, path)
    }
}

/// Lookup of filter implementations by identifier
pub trait FilterRegistry {
    fn get(&self, id: &FilterId) -> Option<Arc<dyn AssetFilter>>;

    fn contains(&self, id: &FilterId) -> bool {
        self.get(id).is_some()
    }
}
