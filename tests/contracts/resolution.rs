//! Section resolution contracts
//!
//! Lists concatenate inherited-then-own, scalars override, inheritance is
//! one level deep and a missing parent or temp directory is fatal.

use std::path::{Path, PathBuf};

use assetpack::domain::ports::{FileQuery, FsResult};
use assetpack::{
    AssetPackError, AssetType, BuildUseCase, DefaultsProvider, FileSpec, FileSystem, FilterId,
    ProjectConfig, RawSection, SectionResolver, SectionSet,
};

/// Every directory is writable; nothing else exists
struct WritableEverywhere;

impl FileSystem for WritableEverywhere {
    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn is_dir(&self, _path: &Path) -> bool {
        true
    }

    fn is_writable_dir(&self, _path: &Path) -> bool {
        true
    }

    fn find_files(&self, _query: &FileQuery) -> FsResult<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}

fn ids(names: &[&str]) -> Vec<FilterId> {
    names.iter().map(|n| FilterId::from(*n)).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn literals(items: &[&str]) -> Vec<FileSpec> {
    items.iter().map(|s| FileSpec::literal(*s)).collect()
}

fn defaults() -> DefaultsProvider {
    DefaultsProvider::new("/www").with_override(
        AssetType::Js,
        RawSection::new()
            .with_files(literals(&["polyfill.js"]))
            .with_remote_files(strings(&["https://cdn/base.js"]))
            .with_filters(ids(&["banner"]))
            .with_file_filters(ids(&["strict"])),
    )
}

/// CONTRACT: without a parent, every list is `default ++ own`
#[test]
fn contract_lists_follow_default_then_own() {
    let sections = SectionSet::new().with_section(
        "app",
        RawSection::new()
            .with_files(literals(&["a.js", "b.js"]))
            .with_remote_files(strings(&["https://cdn/x.js"]))
            .with_filters(ids(&["minify"]))
            .with_file_filters(ids(&["lint", "wrap"])),
    );
    let type_default = defaults().defaults(AssetType::Js);

    let resolved =
        SectionResolver::new(AssetType::Js, &sections, &type_default, &WritableEverywhere)
            .resolve("app")
            .unwrap();

    assert_eq!(resolved.config.files, literals(&["polyfill.js", "a.js", "b.js"]));
    assert_eq!(
        resolved.config.remote_files,
        strings(&["https://cdn/base.js", "https://cdn/x.js"])
    );
    assert_eq!(resolved.config.filters, ids(&["banner", "minify"]));
    assert_eq!(resolved.config.file_filters, ids(&["strict", "lint", "wrap"]));
}

/// CONTRACT: with a parent, every list is `default ++ parent ++ own`
#[test]
fn contract_lists_follow_parent_then_own() {
    let sections = SectionSet::new()
        .with_section(
            "app",
            RawSection::new()
                .with_files(literals(&["p1.js", "p2.js", "p3.js"]))
                .with_filters(ids(&["minify"])),
        )
        .with_section(
            "admin",
            RawSection::new()
                .with_extends("app")
                .with_files(literals(&["admin.js"])),
        );
    let type_default = defaults().defaults(AssetType::Js);

    let resolved =
        SectionResolver::new(AssetType::Js, &sections, &type_default, &WritableEverywhere)
            .resolve("admin")
            .unwrap();

    assert_eq!(
        resolved.config.files,
        literals(&["polyfill.js", "p1.js", "p2.js", "p3.js", "admin.js"])
    );
    assert_eq!(resolved.config.filters, ids(&["banner", "minify"]));
    assert_eq!(resolved.parent.as_deref(), Some("app"));
}

/// CONTRACT: own scalars beat the parent's, the parent's beat the defaults
#[test]
fn contract_scalars_override() {
    let sections = SectionSet::new()
        .with_section(
            "app",
            RawSection::new()
                .with_temp_path("parent-path")
                .with_join_files(false),
        )
        .with_section(
            "admin",
            RawSection::new()
                .with_extends("app")
                .with_temp_path("own-path"),
        );
    let type_default = defaults().defaults(AssetType::Js);
    let resolver =
        SectionResolver::new(AssetType::Js, &sections, &type_default, &WritableEverywhere);

    let admin = resolver.resolve("admin").unwrap();

    assert_eq!(admin.config.temp_path, "own-path");
    assert!(!admin.config.join_files);
    assert_eq!(admin.config.source_dir, PathBuf::from("/www/js"));
}

/// CONTRACT: a missing parent names the section and the parent
#[test]
fn contract_missing_parent_names_both() {
    let sections =
        SectionSet::new().with_section("print", RawSection::new().with_extends("screen"));
    let type_default = defaults().defaults(AssetType::Css);

    let err = SectionResolver::new(AssetType::Css, &sections, &type_default, &WritableEverywhere)
        .resolve("print")
        .unwrap_err();

    assert!(matches!(err, AssetPackError::MissingParent { .. }));
    let message = err.to_string();
    assert!(message.contains("css.print"), "{message}");
    assert!(message.contains("css.screen"), "{message}");
}

/// CONTRACT: parents are looked up within the same asset type only
#[test]
fn contract_parent_is_same_type_only() {
    let config = ProjectConfig {
        css: SectionSet::new().with_section("base", RawSection::new()),
        js: SectionSet::new().with_section("app", RawSection::new().with_extends("base")),
        ..ProjectConfig::default()
    };

    let err = BuildUseCase::new(WritableEverywhere)
        .execute(&config, &defaults())
        .unwrap_err();

    assert!(matches!(err, AssetPackError::MissingParent { .. }));
    assert_eq!(err.section().unwrap().to_string(), "js.app");
}

/// CONTRACT: a temp directory that does not exist fails the build
#[test]
fn contract_missing_temp_dir_yields_no_pipeline() {
    let root = tempfile::tempdir().unwrap();
    let config = ProjectConfig {
        css: SectionSet::new().with_section(
            "screen",
            RawSection::new().with_temp_dir(root.path().join("missing").display().to_string()),
        ),
        ..ProjectConfig::default()
    };

    let result = BuildUseCase::new(assetpack::LocalFs::new())
        .execute(&config, &DefaultsProvider::new(root.path()));

    match result {
        Err(AssetPackError::UnwritableTempDir { section, path }) => {
            assert_eq!(section.to_string(), "css.screen");
            assert_eq!(path, root.path().join("missing"));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(output) => panic!("expected failure, got {} pipeline(s)", output.pipelines.len()),
    }
}
