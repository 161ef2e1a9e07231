//! Command handlers for the assetpack binary

pub mod build;
pub mod lookup;
pub mod show;

use std::io;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use assetpack::config::{LoadOptions, LoadedConfig, ProjectConfig};
use assetpack::presentation::output::{emit, render_warning};
use assetpack::presentation::OutputFormat;

/// Global CLI options shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub config: PathBuf,
    pub www_dir: Option<PathBuf>,
    pub json: bool,
    pub verbose: u8,
}

impl Context {
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }

    fn load_options(&self) -> LoadOptions {
        let options = LoadOptions::new();
        let options = match &self.www_dir {
            Some(dir) => options.with_www_dir(dir),
            None => options,
        };
        options.with_env_overrides()
    }

    /// Load the configuration and report unknown keys
    pub fn load(&self) -> Result<LoadedConfig> {
        let loaded = ProjectConfig::load(&self.config, &self.load_options())
            .with_context(|| format!("failed to load {}", self.config.display()))?;

        for warning in &loaded.warnings {
            match self.format() {
                OutputFormat::Json => emit(serde_json::json!({
                    "event": "warning",
                    "key": warning.path,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                }))?,
                OutputFormat::Text => render_warning(&mut io::stderr().lock(), warning)?,
            }
        }

        Ok(loaded)
    }
}
