//! Configuration module for assetpack
//!
//! Configuration hierarchy, highest priority first:
//! 1. CLI flags (`--www-dir`)
//! 2. Environment variables (ASSETPACK_*)
//! 3. Project config (`assetpack.toml`, or a `.yaml` file)
//! 4. Built-in type defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{expand_parameters, load_with_warnings, parse_str};
pub use types::{
    ConfigFormat, LoadOptions, LoadedConfig, ProjectConfig, DEFAULT_CONFIG_FILE, WWW_DIR_PARAM,
};
