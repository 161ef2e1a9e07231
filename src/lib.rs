//! assetpack - configuration-driven builder for named JS and CSS pipelines
//!
//! A project declares named sections per asset type (`css.screen`,
//! `js.app`). assetpack resolves each section against the type defaults and
//! an optional parent, expands its file list, validates the filesystem, and
//! describes the pipeline a compiler has to build. Every section's public
//! temp path is published in a case-insensitive loader registry.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOutput, BuildUseCase, RegistryCollision, SectionReport};
pub use config::{ConfigWarning, LoadOptions, LoadedConfig, ProjectConfig};
pub use domain::entities::{
    DiscoverySpec, EffectiveConfig, FileSpec, PipelineDescriptor, RawSection, ResolvedFile,
    ResolvedFileList, ResolvedSection, SectionSet,
};
pub use domain::ports::{AssetFilter, BuildEvent, BuildEventSink, FileSystem, FilterRegistry};
pub use domain::services::{
    DefaultsProvider, FactoryRegistry, FileSetResolver, PipelineBuilder, SectionResolver,
};
pub use domain::value_objects::{AssetType, FilterId, NamingConventionRef, SectionId};
pub use error::{AssetPackError, AssetPackResult};
pub use infrastructure::{InMemoryFilterRegistry, LocalFs};
