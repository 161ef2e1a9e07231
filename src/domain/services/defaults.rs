//! Type defaults
//!
//! Baseline configuration per asset type. Every section starts from these
//! values before its own (or its parent's) declarations are merged in.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::{EffectiveConfig, RawSection};
use crate::domain::value_objects::{AssetType, NamingConventionRef};

use super::section_resolver::merge;

/// Public path compiled output is served from unless configured otherwise
pub const DEFAULT_TEMP_PATH: &str = "webtemp";

#[derive(Debug, Clone)]
pub struct DefaultsProvider {
    www_dir: PathBuf,
    overrides: HashMap<AssetType, RawSection>,
}

impl DefaultsProvider {
    /// Defaults rooted at the public web directory.
    pub fn new(www_dir: impl Into<PathBuf>) -> Self {
        Self {
            www_dir: www_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Overlay user-declared defaults (`css_defaults` / `js_defaults`).
    pub fn with_override(mut self, asset_type: AssetType, overrides: RawSection) -> Self {
        self.overrides.insert(asset_type, overrides);
        self
    }

    pub fn www_dir(&self) -> &Path {
        &self.www_dir
    }

    /// Built-in defaults, before any user overrides.
    pub fn builtin(&self, asset_type: AssetType) -> EffectiveConfig {
        EffectiveConfig {
            source_dir: self.www_dir.join(asset_type.as_str()),
            temp_dir: self.www_dir.join(DEFAULT_TEMP_PATH),
            temp_path: DEFAULT_TEMP_PATH.to_string(),
            files: Vec::new(),
            remote_files: Vec::new(),
            filters: Vec::new(),
            file_filters: Vec::new(),
            join_files: true,
            naming_convention: NamingConventionRef::new(asset_type.default_naming_convention()),
        }
    }

    /// Defaults a section of this type is resolved against.
    pub fn defaults(&self, asset_type: AssetType) -> EffectiveConfig {
        let builtin = self.builtin(asset_type);
        match self.overrides.get(&asset_type) {
            Some(overrides) => merge(&builtin, overrides),
            None => builtin,
        }
    }
}
