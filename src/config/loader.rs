//! Configuration loading and parameter expansion

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::{FileSpec, RawSection};
use crate::domain::services::DefaultsProvider;
use crate::domain::value_objects::{AssetType, ConfigWarning};
use crate::error::{AssetPackError, AssetPackResult};

use super::types::{ConfigFormat, LoadOptions, LoadedConfig, ProjectConfig, WWW_DIR_PARAM};

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Placeholders are expanded and relative directories are anchored at the
/// directory containing the config file.
pub fn load_with_warnings(path: &Path, options: &LoadOptions) -> AssetPackResult<LoadedConfig> {
    let format =
        ConfigFormat::from_path(path).ok_or_else(|| AssetPackError::UnsupportedConfigFormat {
            file: path.to_path_buf(),
        })?;
    let content = fs::read_to_string(path)?;

    let (config, unknown_paths) =
        parse_str(&content, format).map_err(|message| AssetPackError::InvalidConfig {
            file: path.to_path_buf(),
            message,
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                path: path_str,
                key,
            }
        })
        .collect();

    let (config, defaults) = prepare(config, &config_dir(path), options)?;

    Ok(LoadedConfig {
        config,
        defaults,
        warnings,
    })
}

/// Parse config text, returning the dotted paths of keys that were ignored.
pub fn parse_str(
    content: &str,
    format: ConfigFormat,
) -> Result<(ProjectConfig, Vec<String>), String> {
    let mut unknown_paths: Vec<String> = Vec::new();

    let config = match format {
        ConfigFormat::Toml => {
            let deserializer = toml::de::Deserializer::new(content);
            serde_ignored::deserialize(deserializer, |p| unknown_paths.push(p.to_string()))
                .map_err(|e| e.to_string())?
        }
        ConfigFormat::Yaml if content.trim().is_empty() => ProjectConfig::default(),
        ConfigFormat::Yaml => {
            let deserializer = serde_yaml_ng::Deserializer::from_str(content);
            serde_ignored::deserialize(deserializer, |p| unknown_paths.push(p.to_string()))
                .map_err(|e| e.to_string())?
        }
    };

    Ok((config, unknown_paths))
}

/// Apply environment variable overrides (ASSETPACK_* prefix) to options the
/// caller left unset
pub fn with_env_overrides(mut options: LoadOptions) -> LoadOptions {
    // ASSETPACK_WWW_DIR
    if options.www_dir.is_none() {
        if let Ok(dir) = std::env::var("ASSETPACK_WWW_DIR") {
            if !dir.is_empty() {
                options.www_dir = Some(PathBuf::from(dir));
            }
        }
    }

    // ASSETPACK_JOIN_FILES
    if options.join_files.is_none() {
        if let Ok(val) = std::env::var("ASSETPACK_JOIN_FILES") {
            options.join_files = Some(val.to_lowercase() != "false" && val != "0");
        }
    }

    options
}

/// Replace `%name%` placeholders with parameter values. `%%` is a literal `%`;
/// a `%` without a closing partner is kept as is.
pub fn expand_parameters(
    value: &str,
    parameters: &BTreeMap<String, String>,
) -> AssetPackResult<String> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('%') else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let name = &after[..end];
        if name.is_empty() {
            out.push('%');
        } else {
            match parameters.get(name) {
                Some(replacement) => out.push_str(replacement),
                None => {
                    return Err(AssetPackError::UnknownParameter {
                        name: name.to_string(),
                        value: value.to_string(),
                    })
                }
            }
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Expand parameters everywhere, apply option overrides and build the type
/// defaults.
pub(crate) fn prepare(
    mut config: ProjectConfig,
    base_dir: &Path,
    options: &LoadOptions,
) -> AssetPackResult<(ProjectConfig, DefaultsProvider)> {
    let www_dir = match (&options.www_dir, config.parameters.get(WWW_DIR_PARAM)) {
        (Some(dir), _) => dir.clone(),
        (None, Some(dir)) => anchor(base_dir, dir),
        (None, None) => base_dir.to_path_buf(),
    };
    config
        .parameters
        .insert(WWW_DIR_PARAM.to_string(), www_dir.display().to_string());

    let parameters = config.parameters.clone();
    for asset_type in AssetType::ALL {
        if let Some(defaults) = config.defaults_override_mut(asset_type) {
            expand_section(defaults, &parameters, base_dir)?;
        }
        for (_, section) in config.sections_mut(asset_type).iter_mut() {
            expand_section(section, &parameters, base_dir)?;
        }
    }

    if let Some(join) = options.join_files {
        for asset_type in AssetType::ALL {
            config
                .defaults_override_mut(asset_type)
                .get_or_insert_with(RawSection::default)
                .join_files = Some(join);
        }
    }

    let defaults = config.defaults_provider(www_dir);
    Ok((config, defaults))
}

fn expand_section(
    section: &mut RawSection,
    parameters: &BTreeMap<String, String>,
    base_dir: &Path,
) -> AssetPackResult<()> {
    for dir in [&mut section.source_dir, &mut section.temp_dir]
        .into_iter()
        .flatten()
    {
        expand_in_place(dir, parameters)?;
        *dir = anchor(base_dir, dir).display().to_string();
    }
    if let Some(temp_path) = &mut section.temp_path {
        expand_in_place(temp_path, parameters)?;
    }

    for spec in section.files.iter_mut().flatten() {
        match spec {
            FileSpec::Literal(path) => expand_in_place(path, parameters)?,
            FileSpec::Discovery(discovery) => {
                for mask in discovery.files.iter_mut().chain(discovery.exclude.iter_mut()) {
                    expand_in_place(mask, parameters)?;
                }
                for root in [&mut discovery.in_dir, &mut discovery.from]
                    .into_iter()
                    .flatten()
                {
                    expand_in_place(root, parameters)?;
                }
            }
        }
    }

    for url in section.remote_files.iter_mut().flatten() {
        expand_in_place(url, parameters)?;
    }

    Ok(())
}

fn expand_in_place(
    value: &mut String,
    parameters: &BTreeMap<String, String>,
) -> AssetPackResult<()> {
    *value = expand_parameters(value, parameters)?;
    Ok(())
}

/// Relative paths are taken relative to the config file's directory
fn anchor(base_dir: &Path, dir: &str) -> PathBuf {
    let path = Path::new(dir);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn config_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "parameters",
        "css_defaults",
        "js_defaults",
        "css",
        "js",
        "extends",
        "source_dir",
        "temp_dir",
        "temp_path",
        "files",
        "remote_files",
        "filters",
        "file_filters",
        "join_files",
        "naming_convention",
        "pattern",
        "exclude",
        "exclude_pattern",
        "in",
        "from",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
