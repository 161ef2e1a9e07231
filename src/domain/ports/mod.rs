//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod file_system;
pub mod filter_registry;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use file_system::{FileQuery, FileSystem, FsError, FsResult};
pub use filter_registry::{AssetFilter, FilterError, FilterRegistry};
