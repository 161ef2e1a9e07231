//! Output Rendering
//!
//! Human-readable text for terminals and NDJSON (one object per line) for
//! scripting.

use std::io::{self, Write};

use crate::application::{BuildOutput, SectionReport};
use crate::domain::entities::{EffectiveConfig, ResolvedFile};
use crate::domain::value_objects::{ConfigWarning, FilterId};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn render_warning(out: &mut impl Write, warning: &ConfigWarning) -> io::Result<()> {
    writeln!(out, "Warning: {}", warning)
}

/// All pipelines followed by the loader registry
pub fn render_build(out: &mut impl Write, output: &BuildOutput) -> io::Result<()> {
    for pipeline in &output.pipelines {
        writeln!(
            out,
            "{} ({}, {})",
            pipeline.section,
            pipeline.files_service_name(),
            pipeline.compiler_service_name()
        )?;
        writeln!(
            out,
            "  source:  {}",
            pipeline.file_collection.source_dir.display()
        )?;
        writeln!(
            out,
            "  temp:    {} (join: {})",
            pipeline.compiler.temp_dir.display(),
            yes_no(pipeline.compiler.join_files)
        )?;
        writeln!(out, "  naming:  {}", pipeline.compiler.naming_convention)?;
        render_filters(out, "filters", &pipeline.compiler.filters)?;
        render_filters(out, "file filters", &pipeline.compiler.file_filters)?;
        for file in &pipeline.file_collection.files {
            writeln!(out, "  - {}", file.display())?;
        }
        for url in &pipeline.file_collection.remote_files {
            writeln!(out, "  ~ {}", url)?;
        }
        writeln!(out)?;
    }

    if output.registry.is_empty() {
        writeln!(out, "No sections declared.")?;
        return Ok(());
    }

    writeln!(out, "Loaders:")?;
    for (name, temp_path) in output.registry.temp_paths() {
        writeln!(out, "  {} -> {}", name, temp_path)?;
    }
    Ok(())
}

/// One section's effective configuration and files
pub fn render_section(out: &mut impl Write, report: &SectionReport) -> io::Result<()> {
    let section = &report.section;
    match &section.parent {
        Some(parent) => writeln!(out, "{} (extends {})", section.id, parent)?,
        None => writeln!(out, "{}", section.id)?,
    }
    render_effective(out, &section.config)?;

    writeln!(out, "  files:")?;
    if report.resolved_files.is_empty() {
        writeln!(out, "    (none)")?;
    }
    for file in report.resolved_files.iter() {
        match file {
            ResolvedFile::Local(path) => writeln!(out, "    - {}", path.display())?,
            ResolvedFile::Remote(url) => writeln!(out, "    ~ {}", url)?,
        }
    }
    Ok(())
}

fn render_effective(out: &mut impl Write, config: &EffectiveConfig) -> io::Result<()> {
    writeln!(out, "  source_dir: {}", config.source_dir.display())?;
    writeln!(out, "  temp_dir:   {}", config.temp_dir.display())?;
    writeln!(out, "  temp_path:  {}", config.temp_path)?;
    writeln!(out, "  join_files: {}", yes_no(config.join_files))?;
    writeln!(out, "  naming:     {}", config.naming_convention)?;
    render_filters(out, "filters", &config.filters)?;
    render_filters(out, "file filters", &config.file_filters)
}

fn render_filters(out: &mut impl Write, label: &str, filters: &[FilterId]) -> io::Result<()> {
    if filters.is_empty() {
        return Ok(());
    }
    let names: Vec<&str> = filters.iter().map(FilterId::as_str).collect();
    writeln!(out, "  {}: {}", label, names.join(", "))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
