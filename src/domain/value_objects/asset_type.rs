//! Asset type value object
//!
//! - `Css` sections build stylesheet bundles
//! - `Js` sections build script bundles

use serde::{Deserialize, Serialize};

/// Type of asset bundle a section describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Css,
    Js,
}

impl AssetType {
    /// All types in the order a build resolves them
    pub const ALL: [AssetType; 2] = [AssetType::Css, AssetType::Js];

    /// Lowercase identifier used in config keys and section ids
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Css => "css",
            AssetType::Js => "js",
        }
    }

    /// Name of the naming-convention service this type uses by default
    pub fn default_naming_convention(&self) -> &'static str {
        match self {
            AssetType::Css => "@cssNamingConvention",
            AssetType::Js => "@jsNamingConvention",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(AssetType::Css),
            "js" => Ok(AssetType::Js),
            other => Err(format!("unknown asset type '{}' (expected css or js)", other)),
        }
    }
}
