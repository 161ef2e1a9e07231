//! File set resolver
//!
//! Expands a section's `files` entries into the ordered list of files the
//! compiler joins:
//! - Literal entries must exist as given or under `source_dir`. Existence is
//!   a gate only: the entry is passed on exactly as written.
//! - Discovery entries are expanded by a mask search rooted at `in` (one
//!   level) or `from` (recursive). Found files are not re-checked.
//! - `remote_files` follow all local files, unchecked and in declared order.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::domain::entities::{DiscoverySpec, FileSpec, ResolvedFileList, ResolvedSection};
use crate::domain::ports::{FileQuery, FileSystem, FsError};
use crate::domain::value_objects::SectionId;
use crate::error::{AssetPackError, AssetPackResult};

/// Join a configured path onto the source directory the way the loader does:
/// trailing separators of `source_dir` are trimmed, then one separator is added.
pub fn join_source_dir(source_dir: &Path, path: &str) -> PathBuf {
    let source = source_dir.to_string_lossy();
    let trimmed = source.trim_end_matches(['/', '\\']);
    PathBuf::from(format!("{}{}{}", trimmed, MAIN_SEPARATOR, path))
}

pub struct FileSetResolver<'a, FS: FileSystem> {
    file_system: &'a FS,
}

impl<'a, FS: FileSystem> FileSetResolver<'a, FS> {
    pub fn new(file_system: &'a FS) -> Self {
        Self { file_system }
    }

    /// Resolve every file of a section, or fail as a whole.
    pub fn resolve(&self, section: &ResolvedSection) -> AssetPackResult<ResolvedFileList> {
        let config = &section.config;
        let mut list = ResolvedFileList::new();

        for entry in &config.files {
            match entry {
                FileSpec::Literal(path) => {
                    self.check_literal(&section.id, path, &config.source_dir)?;
                    list.push_local(path);
                }
                FileSpec::Discovery(spec) => {
                    for found in self.discover(&section.id, spec, &config.source_dir)? {
                        list.push_local(found);
                    }
                }
            }
        }

        for remote in &config.remote_files {
            list.push_remote(remote.clone());
        }

        Ok(list)
    }

    fn check_literal(&self, id: &SectionId, path: &str, source_dir: &Path) -> AssetPackResult<()> {
        let given = PathBuf::from(path);
        if self.file_system.exists(&given) {
            return Ok(());
        }

        let joined = join_source_dir(source_dir, path);
        if self.file_system.exists(&joined) {
            return Ok(());
        }

        Err(AssetPackError::FileNotFound {
            section: id.clone(),
            given,
            joined,
        })
    }

    fn discover(
        &self,
        id: &SectionId,
        spec: &DiscoverySpec,
        source_dir: &Path,
    ) -> AssetPackResult<Vec<PathBuf>> {
        let invalid = |reason: String| AssetPackError::InvalidDiscoverySpec {
            section: id.clone(),
            pattern: spec.files.display(),
            reason,
        };

        if spec.files.is_empty() {
            return Err(invalid("no file mask given".to_string()));
        }
        let root = spec.root().map_err(|reason| invalid(reason.to_string()))?;

        // A root that is not an existing directory is taken relative to source_dir
        let given = PathBuf::from(root.path());
        let search_root = if self.file_system.is_dir(&given) {
            given
        } else {
            let joined = join_source_dir(source_dir, root.path());
            if !self.file_system.is_dir(&joined) {
                return Err(invalid(format!(
                    "neither '{}' nor '{}' is a directory",
                    given.display(),
                    joined.display()
                )));
            }
            joined
        };

        let query = FileQuery::new(&search_root, spec.files.iter().map(String::from).collect())
            .with_exclude(spec.exclude.iter().map(String::from).collect())
            .recursive(root.is_recursive());

        self.file_system
            .find_files(&query)
            .map_err(|err| match err {
                FsError::InvalidPattern { pattern, message } => AssetPackError::InvalidPattern {
                    section: id.clone(),
                    pattern,
                    message,
                },
                other => AssetPackError::Discovery {
                    section: id.clone(),
                    root: search_root.clone(),
                    message: other.to_string(),
                },
            })
    }
}
