//! Section entities
//!
//! A section is a named, user-declared fragment describing one asset bundle.
//! Every field is optional; missing fields are filled in from the type
//! defaults or the inherited parent during resolution.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::value_objects::{FilterId, NamingConventionRef};

/// Partial configuration record of one section, as declared by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSection {
    /// Name of the parent section of the same type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileSpec>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<FilterId>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_filters: Option<Vec<FilterId>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_files: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming_convention: Option<NamingConventionRef>,
}

impl RawSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn with_source_dir(mut self, dir: impl Into<String>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    pub fn with_temp_dir(mut self, dir: impl Into<String>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    pub fn with_temp_path(mut self, path: impl Into<String>) -> Self {
        self.temp_path = Some(path.into());
        self
    }

    pub fn with_files(mut self, files: Vec<FileSpec>) -> Self {
        self.files = Some(files);
        self
    }

    pub fn with_remote_files(mut self, files: Vec<String>) -> Self {
        self.remote_files = Some(files);
        self
    }

    pub fn with_filters(mut self, filters: Vec<FilterId>) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_file_filters(mut self, filters: Vec<FilterId>) -> Self {
        self.file_filters = Some(filters);
        self
    }

    pub fn with_join_files(mut self, join: bool) -> Self {
        self.join_files = Some(join);
        self
    }

    pub fn with_naming_convention(mut self, reference: impl Into<String>) -> Self {
        self.naming_convention = Some(NamingConventionRef::new(reference));
        self
    }
}

/// One entry of a section's `files` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FileSpec {
    /// A path checked against the filesystem as given, then under `source_dir`
    Literal(String),
    /// A mask-based search rooted at `in` (one level) or `from` (recursive)
    Discovery(DiscoverySpec),
}

impl FileSpec {
    pub fn literal(path: impl Into<String>) -> Self {
        FileSpec::Literal(path.into())
    }

    pub fn discover_in(mask: impl Into<String>, dir: impl Into<String>) -> Self {
        FileSpec::Discovery(DiscoverySpec {
            files: Masks::one(mask),
            exclude: Masks::default(),
            in_dir: Some(dir.into()),
            from: None,
        })
    }

    pub fn discover_from(mask: impl Into<String>, dir: impl Into<String>) -> Self {
        FileSpec::Discovery(DiscoverySpec {
            files: Masks::one(mask),
            exclude: Masks::default(),
            in_dir: None,
            from: Some(dir.into()),
        })
    }
}

/// A string is a literal path, a table is a discovery directive
impl<'de> Deserialize<'de> for FileSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FileSpecVisitor;

        impl<'de> Visitor<'de> for FileSpecVisitor {
            type Value = FileSpec;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a file path or a table with `files` and `in` or `from`")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<FileSpec, E> {
                Ok(FileSpec::Literal(value.to_string()))
            }

            fn visit_map<A>(self, map: A) -> Result<FileSpec, A::Error>
            where
                A: MapAccess<'de>,
            {
                DiscoverySpec::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(FileSpec::Discovery)
            }
        }

        deserializer.deserialize_any(FileSpecVisitor)
    }
}

/// Discovery directive: which masks to match and where to search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoverySpec {
    #[serde(alias = "pattern")]
    pub files: Masks,

    #[serde(default, alias = "exclude_pattern", skip_serializing_if = "Masks::is_empty")]
    pub exclude: Masks,

    #[serde(default, rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Where a discovery spec searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryRoot<'a> {
    /// Direct children of the directory only
    In(&'a str),
    /// The directory and all of its descendants
    From(&'a str),
}

impl<'a> DiscoveryRoot<'a> {
    pub fn path(&self) -> &'a str {
        match self {
            DiscoveryRoot::In(path) | DiscoveryRoot::From(path) => path,
        }
    }

    pub fn is_recursive(&self) -> bool {
        matches!(self, DiscoveryRoot::From(_))
    }
}

impl DiscoverySpec {
    pub fn with_exclude(mut self, mask: impl Into<String>) -> Self {
        self.exclude.0.push(mask.into());
        self
    }

    /// The search root; exactly one of `in` and `from` must be set.
    pub fn root(&self) -> Result<DiscoveryRoot<'_>, &'static str> {
        match (&self.in_dir, &self.from) {
            (Some(dir), None) => Ok(DiscoveryRoot::In(dir)),
            (None, Some(dir)) => Ok(DiscoveryRoot::From(dir)),
            (Some(_), Some(_)) => Err("'in' and 'from' are mutually exclusive"),
            (None, None) => Err("one of 'in' or 'from' is required"),
        }
    }
}

/// One file mask or a list of them
///
/// Accepts both forms:
///   files = "*.css"
///   files = ["*.css", "*.less"]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Masks(Vec<String>);

impl Masks {
    pub fn one(mask: impl Into<String>) -> Self {
        Self(vec![mask.into()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.0.iter_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Masks joined for messages: `*.css, *.less`
    pub fn display(&self) -> String {
        self.0.join(", ")
    }
}

impl From<Vec<String>> for Masks {
    fn from(masks: Vec<String>) -> Self {
        Self(masks)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MasksDe {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for Masks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match MasksDe::deserialize(deserializer)? {
            MasksDe::One(mask) => Ok(Self(vec![mask])),
            MasksDe::Many(masks) => Ok(Self(masks)),
        }
    }
}

/// All sections declared for one asset type, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionSet {
    sections: Vec<(String, RawSection)>,
}

impl SectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a section. A replaced section keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, section: RawSection) -> Option<RawSection> {
        let name = name.into();
        match self.sections.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, section)),
            None => {
                self.sections.push((name, section));
                None
            }
        }
    }

    pub fn with_section(mut self, name: impl Into<String>, section: RawSection) -> Self {
        self.insert(name, section);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RawSection> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, section)| section)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawSection)> {
        self.sections.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut RawSection)> {
        self.sections.iter_mut().map(|(n, s)| (n.as_str(), s))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for SectionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, section) in &self.sections {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}

struct SectionSetVisitor;

impl<'de> Visitor<'de> for SectionSetVisitor {
    type Value = SectionSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a table of named sections")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut set = SectionSet::new();
        while let Some((name, section)) = access.next_entry::<String, RawSection>()? {
            if set.contains(&name) {
                return Err(de::Error::custom(format!(
                    "section '{}' is declared more than once",
                    name
                )));
            }
            set.sections.push((name, section));
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for SectionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SectionSetVisitor)
    }
}
