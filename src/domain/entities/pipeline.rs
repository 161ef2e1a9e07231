//! Pipeline descriptor entity
//!
//! Describes what the compiler-construction collaborator must build for one
//! section: a file collection and a compiler configured with filters, naming
//! convention, join behavior and temp directory.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::ports::{AssetFilter, FilterRegistry};
use crate::domain::value_objects::{FilterId, NamingConventionRef, SectionId};
use crate::error::{AssetPackError, AssetPackResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineDescriptor {
    pub section: SectionId,
    pub file_collection: FileCollectionDefinition,
    pub compiler: CompilerDefinition,
}

/// Source files of a pipeline, local and remote kept apart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCollectionDefinition {
    /// Root that relative `files` entries are resolved against
    pub source_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub remote_files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerDefinition {
    pub naming_convention: NamingConventionRef,
    pub temp_dir: PathBuf,
    pub join_files: bool,
    /// Applied to the joined output, in this order
    pub filters: Vec<FilterId>,
    /// Applied to each file before joining, in this order
    pub file_filters: Vec<FilterId>,
}

impl PipelineDescriptor {
    /// Service name of the file collection (`cssScreenFiles`)
    pub fn files_service_name(&self) -> String {
        self.section.files_service_name()
    }

    /// Service name of the compiler (`cssScreenCompiler`)
    pub fn compiler_service_name(&self) -> String {
        self.section.compiler_service_name()
    }

    /// Resolve the output filters through a registry, keeping their order.
    pub fn resolve_filters(
        &self,
        registry: &dyn FilterRegistry,
    ) -> AssetPackResult<Vec<Arc<dyn AssetFilter>>> {
        self.resolve_all(&self.compiler.filters, registry)
    }

    /// Resolve the per-file filters through a registry, keeping their order.
    pub fn resolve_file_filters(
        &self,
        registry: &dyn FilterRegistry,
    ) -> AssetPackResult<Vec<Arc<dyn AssetFilter>>> {
        self.resolve_all(&self.compiler.file_filters, registry)
    }

    fn resolve_all(
        &self,
        ids: &[FilterId],
        registry: &dyn FilterRegistry,
    ) -> AssetPackResult<Vec<Arc<dyn AssetFilter>>> {
        ids.iter()
            .map(|id| {
                registry
                    .get(id)
                    .ok_or_else(|| AssetPackError::UnknownFilter {
                        section: self.section.clone(),
                        filter: id.to_string(),
                    })
            })
            .collect()
    }
}
