//! Loader registry contracts
//!
//! Names are case-folded and only unique per asset type, so registrations
//! can collide. The later one wins and the collision is reported.

use assetpack::{
    AssetType, BuildUseCase, DefaultsProvider, FactoryRegistry, LocalFs, ProjectConfig,
    RawSection, SectionId, SectionSet,
};

use crate::common::TestEnv;

/// CONTRACT: `Foo` and `foo` share one entry; the last registration wins
#[test]
fn contract_case_variants_collapse_to_one_entry() {
    let mut registry = FactoryRegistry::new();
    let upper = SectionId::new(AssetType::Css, "Foo");
    let lower = SectionId::new(AssetType::Css, "foo");

    assert!(registry.register(&upper, "first").is_none());
    let replaced = registry.register(&lower, "second").unwrap();

    assert_eq!(replaced.owner, upper);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.lookup("FOO").unwrap(), "second");
    assert_eq!(registry.owner("foo"), Some(&lower));
}

/// CONTRACT: js sections register after css sections and win collisions
#[test]
fn contract_cross_type_collision_is_reported() {
    let env = TestEnv::new();
    let config = ProjectConfig {
        css: SectionSet::new().with_section("main", RawSection::new().with_temp_path("css-out")),
        js: SectionSet::new().with_section("Main", RawSection::new().with_temp_path("js-out")),
        ..ProjectConfig::default()
    };

    let output = BuildUseCase::new(LocalFs::new())
        .execute(&config, &DefaultsProvider::new(env.root.path()))
        .unwrap();

    assert_eq!(output.pipelines.len(), 2);
    assert_eq!(output.registry.len(), 1);
    assert_eq!(output.lookup("main").unwrap(), "js-out");
    assert_eq!(output.collisions.len(), 1);
    assert_eq!(output.collisions[0].previous.to_string(), "css.main");
    assert_eq!(output.collisions[0].current.to_string(), "js.Main");
}
