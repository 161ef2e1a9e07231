//! Property tests for loader registry case-folding.

use proptest::prelude::*;

use assetpack::{AssetType, FactoryRegistry, SectionId};

fn asset_type() -> impl Strategy<Value = AssetType> {
    prop_oneof![Just(AssetType::Css), Just(AssetType::Js)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: lookup ignores case, whatever case the section was declared in.
    #[test]
    fn property_lookup_is_case_insensitive(
        name in "[A-Za-z][A-Za-z0-9]{0,12}",
        ty in asset_type(),
    ) {
        let mut registry = FactoryRegistry::new();
        registry.register(&SectionId::new(ty, name.clone()), "webtemp");

        prop_assert_eq!(registry.lookup(&name.to_uppercase()).unwrap(), "webtemp");
        prop_assert_eq!(registry.lookup(&name.to_lowercase()).unwrap(), "webtemp");
    }

    /// PROPERTY: the registry holds one entry per case-folded name, owned by
    /// the last section registered under it.
    #[test]
    fn property_last_registration_wins(
        entries in proptest::collection::vec(("[A-Ca-c]{1,2}", asset_type()), 1..=16),
    ) {
        let mut registry = FactoryRegistry::new();
        for (i, (name, ty)) in entries.iter().enumerate() {
            registry.register(&SectionId::new(*ty, name.clone()), format!("path-{i}"));
        }

        let mut keys: Vec<String> = entries.iter().map(|(n, _)| n.to_lowercase()).collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(registry.len(), keys.len());

        for key in keys {
            let (last, (name, ty)) = entries
                .iter()
                .enumerate()
                .filter(|(_, (n, _))| n.to_lowercase() == key)
                .last()
                .unwrap();
            let expected = format!("path-{last}");
            prop_assert_eq!(registry.lookup(&key).unwrap(), expected.as_str());
            prop_assert_eq!(registry.owner(&key), Some(&SectionId::new(*ty, name.clone())));
        }
    }
}
