//! Pipeline builder
//!
//! Pure assembly of a pipeline descriptor from a resolved section and its
//! files. No I/O; cannot fail.

use crate::domain::entities::{
    CompilerDefinition, FileCollectionDefinition, PipelineDescriptor, ResolvedFileList,
    ResolvedSection,
};

pub struct PipelineBuilder;

impl PipelineBuilder {
    pub fn build(section: &ResolvedSection, files: &ResolvedFileList) -> PipelineDescriptor {
        let config = &section.config;

        PipelineDescriptor {
            section: section.id.clone(),
            file_collection: FileCollectionDefinition {
                source_dir: config.source_dir.clone(),
                files: files.local_files().map(|p| p.to_path_buf()).collect(),
                remote_files: files.remote_files().map(String::from).collect(),
            },
            compiler: CompilerDefinition {
                naming_convention: config.naming_convention.clone(),
                temp_dir: config.temp_dir.clone(),
                join_files: config.join_files,
                filters: config.filters.clone(),
                file_filters: config.file_filters.clone(),
            },
        }
    }
}
