//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! Filesystem questions go through the `FileSystem` port.

mod defaults;
mod factory_registry;
mod file_set_resolver;
mod pipeline_builder;
mod section_resolver;

pub use defaults::{DefaultsProvider, DEFAULT_TEMP_PATH};
pub use factory_registry::{FactoryRegistry, RegistryEntry};
pub use file_set_resolver::{join_source_dir, FileSetResolver};
pub use pipeline_builder::PipelineBuilder;
pub use section_resolver::{merge, SectionResolver};
