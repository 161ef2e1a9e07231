//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Resolve every section into a pipeline and fill the factory registry

pub mod build;

pub use build::{BuildOutput, BuildUseCase, RegistryCollision, SectionReport};
