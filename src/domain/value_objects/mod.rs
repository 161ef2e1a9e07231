//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_type;
mod config_warning;
mod references;
mod section_id;

pub use asset_type::AssetType;
pub use config_warning::ConfigWarning;
pub use references::{FilterId, NamingConventionRef};
pub use section_id::SectionId;
