//! File set contracts
//!
//! Literal entries are checked in two places, discovery is stable and remote
//! files come last.

use std::path::{Path, PathBuf};

use assetpack::{
    AssetPackError, AssetType, BuildUseCase, DefaultsProvider, FileSetResolver, FileSpec, LocalFs,
    ProjectConfig, RawSection, ResolvedFile, SectionResolver, SectionSet,
};

use crate::common::TestEnv;

fn resolve_css(
    env: &TestEnv,
    section: RawSection,
) -> Result<assetpack::ResolvedFileList, AssetPackError> {
    let sections = SectionSet::new().with_section("screen", section);
    let defaults = DefaultsProvider::new(env.root.path());
    let type_default = defaults.defaults(AssetType::Css);
    let fs = LocalFs::new();

    let resolved = SectionResolver::new(AssetType::Css, &sections, &type_default, &fs)
        .resolve("screen")?;
    FileSetResolver::new(&fs).resolve(&resolved)
}

fn local(list: &assetpack::ResolvedFileList) -> Vec<PathBuf> {
    list.local_files().map(Path::to_path_buf).collect()
}

/// CONTRACT: a literal found only under source_dir resolves
#[test]
fn contract_literal_found_under_source_dir() {
    let env = TestEnv::new();
    env.touch("css/assetpack-contract-only.css");

    let list = resolve_css(
        &env,
        RawSection::new().with_files(vec![FileSpec::literal("assetpack-contract-only.css")]),
    )
    .unwrap();

    assert_eq!(local(&list), vec![PathBuf::from("assetpack-contract-only.css")]);
}

/// CONTRACT: a missing literal reports both attempted locations
#[test]
fn contract_missing_literal_mentions_both_paths() {
    let env = TestEnv::new();

    let err = resolve_css(
        &env,
        RawSection::new().with_files(vec![FileSpec::literal("assetpack-contract-gone.css")]),
    )
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("'assetpack-contract-gone.css'"), "{message}");
    assert!(
        message.contains(
            &env.path("css")
                .join("assetpack-contract-gone.css")
                .display()
                .to_string()
        ),
        "{message}"
    );
}

/// CONTRACT: `in` discovery under source_dir finds the files, in stable order
#[test]
fn contract_discovery_in_is_stable() {
    let env = TestEnv::new();
    let b = env.touch("css/assetpack-components/b.css");
    let a = env.touch("css/assetpack-components/a.css");
    env.touch("css/assetpack-components/nested/c.css");

    let section = RawSection::new().with_files(vec![FileSpec::discover_in(
        "*.css",
        "assetpack-components",
    )]);

    let first = resolve_css(&env, section.clone()).unwrap();
    let second = resolve_css(&env, section).unwrap();

    assert_eq!(local(&first), vec![a, b]);
    assert_eq!(first, second);
}

/// CONTRACT: remote files follow every local file, unchecked and in order
#[test]
fn contract_remote_files_come_last() {
    let env = TestEnv::new();
    env.touch("css/assetpack-contract-local.css");

    let list = resolve_css(
        &env,
        RawSection::new()
            .with_files(vec![FileSpec::literal("assetpack-contract-local.css")])
            .with_remote_files(vec![
                "https://cdn.invalid/b.css".to_string(),
                "https://cdn.invalid/a.css".to_string(),
            ]),
    )
    .unwrap();

    let entries: Vec<&ResolvedFile> = list.iter().collect();
    assert_eq!(
        entries,
        vec![
            &ResolvedFile::Local(PathBuf::from("assetpack-contract-local.css")),
            &ResolvedFile::Remote("https://cdn.invalid/b.css".to_string()),
            &ResolvedFile::Remote("https://cdn.invalid/a.css".to_string()),
        ]
    );
}

/// CONTRACT: the pipeline carries the resolved files in join order
#[test]
fn contract_pipeline_keeps_join_order() {
    let env = TestEnv::new();
    env.touch("js/assetpack-lib/z.js");
    env.touch("js/assetpack-lib/deep/y.js");
    env.touch("js/assetpack-first.js");

    let config = ProjectConfig {
        js: SectionSet::new().with_section(
            "app",
            RawSection::new().with_files(vec![
                FileSpec::literal("assetpack-first.js"),
                FileSpec::discover_from("*.js", "assetpack-lib"),
            ]),
        ),
        ..ProjectConfig::default()
    };

    let output = BuildUseCase::new(LocalFs::new())
        .execute(&config, &DefaultsProvider::new(env.root.path()))
        .unwrap();

    let lib = env.path("js").join("assetpack-lib");
    assert_eq!(
        output.pipelines[0].file_collection.files,
        vec![
            PathBuf::from("assetpack-first.js"),
            lib.join("deep").join("y.js"),
            lib.join("z.js"),
        ]
    );
}
