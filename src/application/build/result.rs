//! Build result types

use serde::Serialize;

use crate::domain::entities::{PipelineDescriptor, ResolvedFileList, ResolvedSection};
use crate::domain::services::FactoryRegistry;
use crate::domain::value_objects::SectionId;
use crate::error::AssetPackResult;

/// A loader name published by two sections; `current` won
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryCollision {
    pub key: String,
    pub previous: SectionId,
    pub current: SectionId,
}

/// Everything a build produced, in resolution order
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildOutput {
    pub pipelines: Vec<PipelineDescriptor>,
    pub registry: FactoryRegistry,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collisions: Vec<RegistryCollision>,
}

impl BuildOutput {
    pub fn pipeline(&self, section: &SectionId) -> Option<&PipelineDescriptor> {
        self.pipelines.iter().find(|p| &p.section == section)
    }

    /// Temp path published under `name` (case-insensitive)
    pub fn lookup(&self, name: &str) -> AssetPackResult<&str> {
        self.registry.lookup(name)
    }
}

/// One section's effective configuration and its concrete files
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    #[serde(flatten)]
    pub section: ResolvedSection,
    pub resolved_files: ResolvedFileList,
}
