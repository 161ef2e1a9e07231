//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (LocalFs)
//! - `events/` - Build event sinks (JSON, console)
//! - `filters` - In-memory filter registry

pub mod events;
pub mod filters;
pub mod fs;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use filters::InMemoryFilterRegistry;
pub use fs::LocalFs;
