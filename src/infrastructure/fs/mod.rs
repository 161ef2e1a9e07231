//! File System Implementations
//!
//! - `LocalFs` - Local disk operations and mask-based discovery

mod local;

pub use local::LocalFs;
