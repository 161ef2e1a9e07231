//! Effective configuration entity
//!
//! The fully merged, default-applied configuration of one section. No field
//! is optional; list fields hold the complete merged sequence in application
//! order.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::FileSpec;
use crate::domain::value_objects::{FilterId, NamingConventionRef, SectionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveConfig {
    pub source_dir: PathBuf,
    pub temp_dir: PathBuf,
    /// Public path under which compiled output is served
    pub temp_path: String,
    pub files: Vec<FileSpec>,
    pub remote_files: Vec<String>,
    pub filters: Vec<FilterId>,
    pub file_filters: Vec<FilterId>,
    pub join_files: bool,
    pub naming_convention: NamingConventionRef,
}

/// A declared section together with its effective configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSection {
    pub id: SectionId,
    /// Parent the section inherited from, if any
    pub parent: Option<String>,
    pub config: EffectiveConfig,
}
