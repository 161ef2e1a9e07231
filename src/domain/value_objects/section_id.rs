//! Section identity
//!
//! Section names are unique within one asset type only, so a section is
//! identified by the pair (type, name).

use serde::Serialize;

use super::AssetType;

/// Identity of a declared section: its asset type plus its name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SectionId {
    asset_type: AssetType,
    name: String,
}

impl SectionId {
    pub fn new(asset_type: AssetType, name: impl Into<String>) -> Self {
        Self {
            asset_type,
            name: name.into(),
        }
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key under which the section is published to the loader factory.
    pub fn registry_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Service name of the pipeline, e.g. `cssScreen` for `css.screen`.
    pub fn service_name(&self) -> String {
        let mut chars = self.name.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{}{}", self.asset_type, capitalized)
    }

    pub fn files_service_name(&self) -> String {
        format!("{}Files", self.service_name())
    }

    pub fn compiler_service_name(&self) -> String {
        format!("{}Compiler", self.service_name())
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.asset_type, self.name)
    }
}
