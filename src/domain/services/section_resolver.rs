//! Section resolver
//!
//! Resolves declared sections into effective configurations:
//! - No parent: type defaults, then the section's own declarations
//! - Parent: type defaults, then the parent's raw declarations, then the
//!   section's own declarations
//!
//! Only one level of inheritance is followed. A parent's own `extends` is
//! ignored, so existing configurations keep their merge results.

use std::path::PathBuf;

use crate::domain::entities::{EffectiveConfig, RawSection, ResolvedSection, SectionSet};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{AssetType, SectionId};
use crate::error::{AssetPackError, AssetPackResult};

/// Override merge of a declared section onto a base configuration.
///
/// Done in two explicit steps:
/// 1. Scalars declared by `overlay` replace those of `base`.
/// 2. Every list declared by `overlay` is rebuilt as `base ++ overlay`, so
///    inherited entries always run before the section's own additions.
pub fn merge(base: &EffectiveConfig, overlay: &RawSection) -> EffectiveConfig {
    let mut merged = EffectiveConfig {
        source_dir: overlay
            .source_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| base.source_dir.clone()),
        temp_dir: overlay
            .temp_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| base.temp_dir.clone()),
        temp_path: overlay
            .temp_path
            .clone()
            .unwrap_or_else(|| base.temp_path.clone()),
        join_files: overlay.join_files.unwrap_or(base.join_files),
        naming_convention: overlay
            .naming_convention
            .clone()
            .unwrap_or_else(|| base.naming_convention.clone()),
        files: base.files.clone(),
        remote_files: base.remote_files.clone(),
        filters: base.filters.clone(),
        file_filters: base.file_filters.clone(),
    };

    if let Some(own) = &overlay.files {
        merged.files = inherited_then_own(&base.files, own);
    }
    if let Some(own) = &overlay.remote_files {
        merged.remote_files = inherited_then_own(&base.remote_files, own);
    }
    if let Some(own) = &overlay.filters {
        merged.filters = inherited_then_own(&base.filters, own);
    }
    if let Some(own) = &overlay.file_filters {
        merged.file_filters = inherited_then_own(&base.file_filters, own);
    }

    merged
}

fn inherited_then_own<T: Clone>(inherited: &[T], own: &[T]) -> Vec<T> {
    inherited.iter().chain(own).cloned().collect()
}

/// Resolves every section of one asset type
pub struct SectionResolver<'a, FS: FileSystem> {
    asset_type: AssetType,
    sections: &'a SectionSet,
    type_default: &'a EffectiveConfig,
    file_system: &'a FS,
}

impl<'a, FS: FileSystem> SectionResolver<'a, FS> {
    pub fn new(
        asset_type: AssetType,
        sections: &'a SectionSet,
        type_default: &'a EffectiveConfig,
        file_system: &'a FS,
    ) -> Self {
        Self {
            asset_type,
            sections,
            type_default,
            file_system,
        }
    }

    /// Resolve all sections in declaration order, failing on the first error.
    pub fn resolve_all(&self) -> AssetPackResult<Vec<ResolvedSection>> {
        self.sections
            .names()
            .map(|name| self.resolve(name))
            .collect()
    }

    /// Resolve one section and check its temp directory.
    pub fn resolve(&self, name: &str) -> AssetPackResult<ResolvedSection> {
        let id = SectionId::new(self.asset_type, name);
        let raw = self
            .sections
            .get(name)
            .ok_or_else(|| AssetPackError::UnknownSection {
                section: id.clone(),
            })?;

        let config = self.effective_config(&id, raw)?;

        if !self.file_system.is_writable_dir(&config.temp_dir) {
            return Err(AssetPackError::UnwritableTempDir {
                section: id,
                path: config.temp_dir,
            });
        }

        Ok(ResolvedSection {
            id,
            parent: raw.extends.clone(),
            config,
        })
    }

    /// Merge defaults, the parent (if any) and the section itself. No I/O.
    pub fn effective_config(
        &self,
        id: &SectionId,
        raw: &RawSection,
    ) -> AssetPackResult<EffectiveConfig> {
        let Some(parent_name) = &raw.extends else {
            return Ok(merge(self.type_default, raw));
        };

        let parent_raw =
            self.sections
                .get(parent_name)
                .ok_or_else(|| AssetPackError::MissingParent {
                    section: id.clone(),
                    parent: parent_name.clone(),
                })?;

        let parent_effective = merge(self.type_default, parent_raw);
        Ok(merge(&parent_effective, raw))
    }
}
