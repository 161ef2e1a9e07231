//! Property tests for the section merge laws.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use assetpack::domain::ports::{FileQuery, FsResult};
use assetpack::domain::services::merge;
use assetpack::{
    AssetType, DefaultsProvider, FileSpec, FileSystem, FilterId, RawSection, SectionResolver,
    SectionSet,
};

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

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,8}").unwrap()
}

fn literals() -> impl Strategy<Value = Vec<FileSpec>> {
    proptest::collection::vec(name().prop_map(|n| FileSpec::literal(format!("{n}.js"))), 0..=6)
}

fn filters() -> impl Strategy<Value = Vec<FilterId>> {
    proptest::collection::vec(name().prop_map(FilterId::new), 0..=4)
}

fn section() -> impl Strategy<Value = RawSection> {
    (
        proptest::option::of(literals()),
        proptest::option::of(filters()),
        proptest::option::of(filters()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(files, filters, file_filters, join)| RawSection {
            files,
            filters,
            file_filters,
            join_files: join,
            ..RawSection::default()
        })
}

fn concat<T: Clone>(parts: &[&[T]]) -> Vec<T> {
    parts.iter().flat_map(|p| p.iter().cloned()).collect()
}

fn or_empty<T>(list: &Option<Vec<T>>) -> &[T] {
    list.as_deref().unwrap_or(&[])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: without a parent, lists are `default ++ own`.
    #[test]
    fn property_no_parent_concatenation(defaults in section(), own in section()) {
        let provider = DefaultsProvider::new("/www").with_override(AssetType::Js, defaults);
        let type_default = provider.defaults(AssetType::Js);
        let sections = SectionSet::new().with_section("s", own.clone());

        let resolved =
            SectionResolver::new(AssetType::Js, &sections, &type_default, &WritableEverywhere)
                .resolve("s")
                .unwrap();

        prop_assert_eq!(
            &resolved.config.files,
            &concat(&[type_default.files.as_slice(), or_empty(&own.files)])
        );
        prop_assert_eq!(
            &resolved.config.filters,
            &concat(&[type_default.filters.as_slice(), or_empty(&own.filters)])
        );
        prop_assert_eq!(
            &resolved.config.file_filters,
            &concat(&[type_default.file_filters.as_slice(), or_empty(&own.file_filters)])
        );
        prop_assert_eq!(
            resolved.config.join_files,
            own.join_files.unwrap_or(type_default.join_files)
        );
    }

    /// PROPERTY: with a parent, lists are `resolve_one_level(default, parent) ++ own`.
    #[test]
    fn property_parent_concatenation(parent in section(), own in section()) {
        let provider = DefaultsProvider::new("/www");
        let type_default = provider.defaults(AssetType::Css);
        let child = RawSection { extends: Some("p".to_string()), ..own.clone() };
        let sections = SectionSet::new()
            .with_section("p", parent.clone())
            .with_section("c", child);

        let resolved =
            SectionResolver::new(AssetType::Css, &sections, &type_default, &WritableEverywhere)
                .resolve("c")
                .unwrap();
        let parent_level = merge(&type_default, &parent);

        prop_assert_eq!(
            &resolved.config.files,
            &concat(&[parent_level.files.as_slice(), or_empty(&own.files)])
        );
        prop_assert_eq!(
            &resolved.config.filters,
            &concat(&[parent_level.filters.as_slice(), or_empty(&own.filters)])
        );
        prop_assert_eq!(
            resolved.config.join_files,
            own.join_files.unwrap_or(parent_level.join_files)
        );
    }

    /// PROPERTY: merging a section that declares nothing is the identity.
    #[test]
    fn property_empty_overlay_is_identity(base in section()) {
        let provider = DefaultsProvider::new("/www").with_override(AssetType::Css, base);
        let type_default = provider.defaults(AssetType::Css);

        prop_assert_eq!(merge(&type_default, &RawSection::default()), type_default);
    }
}
