//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{RawSection, SectionSet};
use crate::domain::services::DefaultsProvider;
use crate::domain::value_objects::{AssetType, ConfigWarning};
use crate::error::AssetPackResult;

use super::loader;

/// Config file looked up when none is given
pub const DEFAULT_CONFIG_FILE: &str = "assetpack.toml";

/// Parameter holding the public web directory
pub const WWW_DIR_PARAM: &str = "wwwDir";

/// Supported config file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

/// Project configuration as written in `assetpack.toml`
///
/// ```toml
/// [parameters]
/// wwwDir = "public"
///
/// [css_defaults]
/// temp_dir = "%wwwDir%/cache"
///
/// [css.screen]
/// files = ["reset.css", { files = "*.css", in = "components" }]
///
/// [css.print]
/// extends = "screen"
/// files = ["print.css"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Values substituted for `%name%` placeholders
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_defaults: Option<RawSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_defaults: Option<RawSection>,

    #[serde(default)]
    pub css: SectionSet,

    #[serde(default)]
    pub js: SectionSet,
}

impl ProjectConfig {
    /// Load, expand and prepare a config file, collecting unknown-key warnings.
    pub fn load(path: &Path, options: &LoadOptions) -> AssetPackResult<LoadedConfig> {
        loader::load_with_warnings(path, options)
    }

    /// Sections declared for one asset type, in declaration order
    pub fn sections(&self, asset_type: AssetType) -> &SectionSet {
        match asset_type {
            AssetType::Css => &self.css,
            AssetType::Js => &self.js,
        }
    }

    pub fn sections_mut(&mut self, asset_type: AssetType) -> &mut SectionSet {
        match asset_type {
            AssetType::Css => &mut self.css,
            AssetType::Js => &mut self.js,
        }
    }

    /// User overrides of the built-in type defaults
    pub fn defaults_override(&self, asset_type: AssetType) -> Option<&RawSection> {
        match asset_type {
            AssetType::Css => self.css_defaults.as_ref(),
            AssetType::Js => self.js_defaults.as_ref(),
        }
    }

    pub fn defaults_override_mut(&mut self, asset_type: AssetType) -> &mut Option<RawSection> {
        match asset_type {
            AssetType::Css => &mut self.css_defaults,
            AssetType::Js => &mut self.js_defaults,
        }
    }

    /// Type defaults rooted at `www_dir` with this config's overrides applied
    pub fn defaults_provider(&self, www_dir: impl Into<PathBuf>) -> DefaultsProvider {
        AssetType::ALL
            .into_iter()
            .fold(DefaultsProvider::new(www_dir), |provider, asset_type| {
                match self.defaults_override(asset_type) {
                    Some(overrides) => provider.with_override(asset_type, overrides.clone()),
                    None => provider,
                }
            })
    }
}

/// Caller-supplied overrides, highest priority first: CLI flags, then
/// `ASSETPACK_*` environment variables (see [`LoadOptions::with_env_overrides`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Replaces the `wwwDir` parameter
    pub www_dir: Option<PathBuf>,
    /// Forces `join_files` in both type defaults
    pub join_files: Option<bool>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_www_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.www_dir = Some(dir.into());
        self
    }

    pub fn with_join_files(mut self, join: bool) -> Self {
        self.join_files = Some(join);
        self
    }

    /// Fill unset options from `ASSETPACK_*` environment variables
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}

/// A config file after parameter expansion, ready for resolution
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ProjectConfig,
    pub defaults: DefaultsProvider,
    pub warnings: Vec<ConfigWarning>,
}
