//! Domain Layer
//!
//! The core of assetpack: section resolution and pipeline assembly.
//!
//! ## Structure
//!
//! - `entities/` - Sections, effective configs, file lists, pipeline descriptors
//! - `value_objects/` - Immutable value types (AssetType, SectionId, FilterId)
//! - `services/` - Defaults, SectionResolver, FileSetResolver, PipelineBuilder, FactoryRegistry
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - Filesystem questions go through the `FileSystem` port
//! 2. **Fail fast** - The first invalid section aborts resolution
//! 3. **Ports & Adapters** - Events and filters are trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
