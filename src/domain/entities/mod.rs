//! Domain Entities
//!
//! - `RawSection` / `SectionSet` - user-declared sections
//! - `EffectiveConfig` - a section after defaults and inheritance
//! - `ResolvedFileList` - concrete files of a section, in join order
//! - `PipelineDescriptor` - what the compiler-construction step builds

mod effective;
mod file_list;
mod pipeline;
mod section;

pub use effective::{EffectiveConfig, ResolvedSection};
pub use file_list::{ResolvedFile, ResolvedFileList};
pub use pipeline::{CompilerDefinition, FileCollectionDefinition, PipelineDescriptor};
pub use section::{DiscoveryRoot, DiscoverySpec, FileSpec, Masks, RawSection, SectionSet};
