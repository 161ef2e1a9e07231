//! Error types for assetpack
//!
//! Uses `thiserror` for library errors. Every error raised while resolving a
//! section names that section as `<type>.<name>` so the host can report it.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::SectionId;

/// Result type alias for assetpack operations
pub type AssetPackResult<T> = Result<T, AssetPackError>;

/// Main error type for assetpack operations
#[derive(Error, Debug)]
pub enum AssetPackError {
    /// A section inherits from a section that is not declared for the same type
    #[error(
        "the section {section} inherits from {asset_type}.{parent}, but the parent section is not defined",
        asset_type = .section.asset_type()
    )]
    MissingParent { section: SectionId, parent: String },

    /// A section was requested by name but is not declared
    #[error("the section {section} is not defined")]
    UnknownSection { section: SectionId },

    /// A literal file entry exists neither as given nor under the source directory
    #[error("{section}: neither '{given}' nor '{joined}' was found")]
    FileNotFound {
        section: SectionId,
        given: PathBuf,
        joined: PathBuf,
    },

    /// A discovery entry is malformed (both or neither of `in`/`from`, missing root)
    #[error("{section}: invalid discovery entry '{pattern}': {reason}")]
    InvalidDiscoverySpec {
        section: SectionId,
        pattern: String,
        reason: String,
    },

    /// A discovery mask could not be compiled
    #[error("{section}: invalid file mask '{pattern}': {message}")]
    InvalidPattern {
        section: SectionId,
        pattern: String,
        message: String,
    },

    /// Walking a discovery root failed
    #[error("{section}: failed to search {root}: {message}")]
    Discovery {
        section: SectionId,
        root: PathBuf,
        message: String,
    },

    /// The resolved temp directory is missing or not writable
    #[error("{section}: you must create a writable directory '{path}'")]
    UnwritableTempDir { section: SectionId, path: PathBuf },

    /// A `%name%` placeholder refers to an undefined parameter
    #[error("unknown parameter '%{name}%' in '{value}'")]
    UnknownParameter { name: String, value: String },

    /// The config file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The config file extension is not one of the supported formats
    #[error("unsupported configuration format for {file} (expected .toml, .yaml or .yml)")]
    UnsupportedConfigFormat { file: PathBuf },

    /// No section with this name was registered in the factory registry
    #[error("no loader named '{name}' is registered")]
    UnknownLoader { name: String },

    /// A filter handle has no implementation in the filter registry
    #[error("{section}: filter '{filter}' is not registered")]
    UnknownFilter { section: SectionId, filter: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetPackError {
    /// The section this error was raised for, if it is section-scoped.
    pub fn section(&self) -> Option<&SectionId> {
        match self {
            AssetPackError::MissingParent { section, .. }
            | AssetPackError::UnknownSection { section }
            | AssetPackError::FileNotFound { section, .. }
            | AssetPackError::InvalidDiscoverySpec { section, .. }
            | AssetPackError::InvalidPattern { section, .. }
            | AssetPackError::Discovery { section, .. }
            | AssetPackError::UnwritableTempDir { section, .. }
            | AssetPackError::UnknownFilter { section, .. } => Some(section),
            _ => None,
        }
    }
}
