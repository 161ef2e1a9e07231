//! Build Module
//!
//! Turns a loaded configuration into pipeline descriptors and a populated
//! factory registry.
//!
//! ## Structure
//!
//! - `result` - Result types (`BuildOutput`, `RegistryCollision`, `SectionReport`)
//! - `use_case` - Core use case logic (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use assetpack::application::build::BuildUseCase;
//!
//! let loaded = ProjectConfig::load(path, &LoadOptions::new())?;
//! let output = BuildUseCase::new(LocalFs::new()).execute(&loaded.config, &loaded.defaults)?;
//! ```

mod result;
mod use_case;

pub use result::{BuildOutput, RegistryCollision, SectionReport};
pub use use_case::BuildUseCase;
