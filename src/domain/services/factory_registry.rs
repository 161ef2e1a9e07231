//! Loader factory registry
//!
//! Maps a lower-cased section name to the public temp path of its compiled
//! output, for lookup by name at runtime. Entries remember which section
//! published them: names are only unique per asset type, so `css.Main` and
//! `js.main` publish the same key and the later registration wins.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::value_objects::SectionId;
use crate::error::{AssetPackError, AssetPackResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    pub owner: SectionId,
    pub temp_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactoryRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a section's temp path. Returns the entry it replaced, if any.
    pub fn register(
        &mut self,
        section: &SectionId,
        temp_path: impl Into<String>,
    ) -> Option<RegistryEntry> {
        self.entries.insert(
            section.registry_key(),
            RegistryEntry {
                owner: section.clone(),
                temp_path: temp_path.into(),
            },
        )
    }

    /// Temp path published under `name` (case-insensitive).
    pub fn lookup(&self, name: &str) -> AssetPackResult<&str> {
        self.entries
            .get(&name.to_lowercase())
            .map(|entry| entry.temp_path.as_str())
            .ok_or_else(|| AssetPackError::UnknownLoader {
                name: name.to_string(),
            })
    }

    /// Section that currently owns `name`.
    pub fn owner(&self, name: &str) -> Option<&SectionId> {
        self.entries
            .get(&name.to_lowercase())
            .map(|entry| &entry.owner)
    }

    pub fn temp_paths(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry.temp_path.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialized as the flat `name -> temp_path` map the loader factory takes.
impl Serialize for FactoryRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, temp_path) in self.temp_paths() {
            map.serialize_entry(key, temp_path)?;
        }
        map.end()
    }
}
